//! Invariant rules for calculator state using Validation.

use crate::core::{CalculatorState, DECIMAL_POINT};
use crate::enforcement::violations::InvariantViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of checking every invariant of a state.
pub type InvariantCheck = Validation<(), NonEmptyVec<InvariantViolation>>;

/// Check every invariant, accumulating ALL violations.
/// Returns Validation::Success(()) if the state is consistent.
pub fn check_invariants(state: &CalculatorState) -> InvariantCheck {
    let display = state.display_value();

    let checks = vec![
        check_display_present(display),
        check_single_decimal_point(display),
        check_display_numeric(display),
        check_operator_has_operand(state),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_display_present(display: &str) -> InvariantCheck {
    if display.is_empty() {
        Validation::fail(InvariantViolation::EmptyDisplay)
    } else {
        Validation::success(())
    }
}

fn check_single_decimal_point(display: &str) -> InvariantCheck {
    if display.matches(DECIMAL_POINT).count() > 1 {
        Validation::fail(InvariantViolation::MultipleDecimalPoints {
            display: display.to_string(),
        })
    } else {
        Validation::success(())
    }
}

// "0." and "12." are partial numerals and parse as numbers
fn check_display_numeric(display: &str) -> InvariantCheck {
    if !display.is_empty() && display.parse::<f64>().is_err() {
        Validation::fail(InvariantViolation::MalformedDisplay {
            display: display.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn check_operator_has_operand(state: &CalculatorState) -> InvariantCheck {
    match (state.operator(), state.first_operand()) {
        (Some(operator), None) => {
            Validation::fail(InvariantViolation::OperatorWithoutOperand { operator })
        }
        _ => Validation::success(()),
    }
}
