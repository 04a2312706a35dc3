//! Dispatch errors.

use crate::core::CalcError;
use thiserror::Error;

/// An event whose value does not fit its classification.
///
/// These are contract violations of the event source; the dispatcher
/// rejects them without touching the state or rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Input(#[from] CalcError),

    #[error("'{0}' is not the decimal point key")]
    InvalidDecimal(String),
}
