//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Typed input via [`Digit`] and the closed [`Operator`] set
//! - The [`CalculatorState`] transition operations
//! - Result formatting
//! - Entry [`Phase`]s and a bounded [`PhaseTrace`]
//!
//! Nothing in this module performs I/O or logging; that is the job of
//! the dispatcher that drives it.

mod calculator;
mod error;
mod format;
mod input;
mod operator;
mod phase;
mod trace;

pub use calculator::{CalculatorState, ExpressionPolicy, StateOptions, DECIMAL_POINT};
pub use error::CalcError;
pub use format::{
    format_result, number_to_string, parse_operand, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use input::InputKind;
pub use operator::{Digit, Operator};
pub use phase::Phase;
pub use trace::{PhaseChange, PhaseTrace, DEFAULT_TRACE_CAPACITY};
