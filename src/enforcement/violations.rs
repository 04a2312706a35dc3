//! Invariant violations and handling strategies.

use crate::core::Operator;
use thiserror::Error;

/// A broken invariant of [`CalculatorState`](crate::core::CalculatorState).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("Display is empty")]
    EmptyDisplay,

    #[error("Display '{display}' contains more than one decimal point")]
    MultipleDecimalPoints { display: String },

    #[error("Display '{display}' is not a number")]
    MalformedDisplay { display: String },

    #[error("Operator '{operator}' is pending without a first operand")]
    OperatorWithoutOperand { operator: Operator },
}

/// Strategy for handling invariant violations after a dispatched event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViolationStrategy {
    /// Keep the state and log a warning per violation
    #[default]
    IgnoreAndLog,

    /// Log, then return the state to its startup defaults
    Reset,
}
