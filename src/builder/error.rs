//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Precision {requested} is out of range. Use a value between 0 and {max}")]
    PrecisionOutOfRange { requested: u32, max: u32 },

    #[error("Trace capacity must be at least 1")]
    ZeroTraceCapacity,
}
