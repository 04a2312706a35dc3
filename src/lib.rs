//! Pocketcalc: a four-function calculator state machine
//!
//! Pocketcalc follows a "pure core, imperative shell" layout. The core
//! calculator state is plain data with total transitions and no I/O,
//! while the dispatcher around it routes input events, logs, and renders.
//!
//! # Core Concepts
//!
//! - **State**: [`CalculatorState`] holds the display, the expression log,
//!   the pending operator and its first operand
//! - **Phases**: entry is either idle or waiting for a second operand
//! - **Dispatch**: [`InputDispatcher`] turns key presses into transitions
//!   and renders through a [`RenderSink`]
//! - **Enforcement**: invariant checks that report every violation at once
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::{InputDispatcher, KeyPress, RecordingSink};
//!
//! let mut dispatcher = InputDispatcher::new(RecordingSink::new());
//! for label in ["7", "+", "3", "=", "+", "2", "="] {
//!     dispatcher.dispatch(&KeyPress::from_label(label)).unwrap();
//! }
//!
//! assert_eq!(dispatcher.state().display_value(), "12");
//! assert_eq!(dispatcher.state().expression_value(), "7+3+2=");
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod enforcement;
pub mod logging;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use core::{CalculatorState, Digit, ExpressionPolicy, InputKind, Operator, Phase};
pub use dispatch::{
    Dispatch, DispatchError, InputDispatcher, InputEvent, KeyPress, RecordingSink, RenderSink,
};
