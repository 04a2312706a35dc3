//! Builder API for configuring calculators.
//!
//! The builder collects the settings a session runs with and validates
//! them once, up front.
//!
//! # Example
//!
//! ```
//! use pocketcalc::builder::CalculatorBuilder;
//! use pocketcalc::core::ExpressionPolicy;
//! use pocketcalc::dispatch::RecordingSink;
//!
//! let mut dispatcher = CalculatorBuilder::new()
//!     .precision(2)
//!     .expression_policy(ExpressionPolicy::Strict)
//!     .build(RecordingSink::new())
//!     .unwrap();
//!
//! for label in ["2", "/", "3", "="] {
//!     dispatcher.dispatch_label(label).unwrap();
//! }
//! assert_eq!(dispatcher.state().display_value(), "0.67");
//! ```

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
