//! Validation-based invariant enforcement for calculator state.
//!
//! Checks use Stillwater's `Validation` type so that a corrupted state
//! reports ALL of its broken invariants at once instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::core::{CalculatorState, Operator};
//! use pocketcalc::enforcement::check_invariants;
//!
//! let mut state = CalculatorState::default();
//! state.input_decimal();
//! state.input_decimal();
//! state.handle_operator(Operator::Add);
//!
//! assert!(check_invariants(&state).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_invariants, InvariantCheck};
pub use violations::{InvariantViolation, ViolationStrategy};
