//! Errors raised when converting raw key labels into core input types.

use thiserror::Error;

/// Errors that can occur when parsing calculator input symbols.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("'{0}' is not a digit between 0 and 9")]
    InvalidDigit(String),

    #[error("'{0}' is not one of the operators + - * / =")]
    UnknownOperator(String),
}
