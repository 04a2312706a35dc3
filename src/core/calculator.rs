//! Calculator state and its transition operations.
//!
//! [`CalculatorState`] is plain data plus four total transitions: digit
//! entry, decimal entry, operator selection and reset. None of them can
//! fail and none perform I/O; rendering the result is left to the caller.

use super::format::{format_result, parse_operand, DEFAULT_PRECISION};
use super::operator::{Digit, Operator};
use super::phase::Phase;
use serde::{Deserialize, Serialize};

/// The decimal point key.
pub const DECIMAL_POINT: char = '.';

const INITIAL_DISPLAY: &str = "0";

/// How the expression log treats a decimal point that the display rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionPolicy {
    /// Log every key press, including a second `.` the display ignored.
    /// The log may then show two points where the display has one.
    #[default]
    Faithful,
    /// Only log a `.` that the display accepted.
    Strict,
}

/// Settings that survive a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOptions {
    /// Fractional digits kept when a result is displayed
    pub precision: u32,
    /// Treatment of rejected decimal points in the expression log
    pub expression_policy: ExpressionPolicy,
}

impl Default for StateOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            expression_policy: ExpressionPolicy::default(),
        }
    }
}

/// Arithmetic state of a four-function calculator.
///
/// Operators apply strictly left to right as they are entered; there is no
/// precedence. The result of each operation becomes the first operand of
/// the next one.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{CalculatorState, Digit, Operator};
///
/// let mut state = CalculatorState::default();
/// state.input_digit(Digit::try_from('7').unwrap());
/// state.handle_operator(Operator::Add);
/// state.input_digit(Digit::new(3).unwrap());
/// state.handle_operator(Operator::Equals);
///
/// assert_eq!(state.display_value(), "10");
/// assert_eq!(state.expression_value(), "7+3=");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display_value: String,
    expression_value: String,
    first_operand: Option<f64>,
    waiting_for_second_operand: bool,
    operator: Option<Operator>,
    #[serde(default)]
    options: StateOptions,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_options(StateOptions::default())
    }
}

impl CalculatorState {
    /// Create a state at its startup defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state at its startup defaults with the given settings.
    pub fn with_options(options: StateOptions) -> Self {
        Self {
            display_value: INITIAL_DISPLAY.to_string(),
            expression_value: String::new(),
            first_operand: None,
            waiting_for_second_operand: false,
            operator: None,
            options,
        }
    }

    /// Enter a digit.
    ///
    /// Starts a fresh operand when one is awaited, otherwise appends to the
    /// display with a lone leading zero replaced.
    pub fn input_digit(&mut self, digit: Digit) {
        let c = digit.as_char();

        if self.waiting_for_second_operand {
            self.display_value = c.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display_value == INITIAL_DISPLAY {
            self.display_value = c.to_string();
        } else {
            self.display_value.push(c);
        }

        self.expression_value.push(c);
    }

    /// Enter the decimal point.
    ///
    /// Starts a fresh `0.` operand when one is awaited. Otherwise the
    /// display takes the point only if it has none yet.
    pub fn input_decimal(&mut self) {
        if self.waiting_for_second_operand {
            self.display_value = format!("{INITIAL_DISPLAY}{DECIMAL_POINT}");
            self.waiting_for_second_operand = false;
            self.expression_value.push(DECIMAL_POINT);
            return;
        }

        let accepted = !self.display_value.contains(DECIMAL_POINT);
        if accepted {
            self.display_value.push(DECIMAL_POINT);
        }

        match self.options.expression_policy {
            ExpressionPolicy::Faithful => self.expression_value.push(DECIMAL_POINT),
            ExpressionPolicy::Strict if accepted => self.expression_value.push(DECIMAL_POINT),
            ExpressionPolicy::Strict => {}
        }
    }

    /// Select an operator.
    ///
    /// Pressing an operator right after another one only swaps the pending
    /// operator. Otherwise the operand on display is either captured as the
    /// first operand or combined with it under the pending operator, and
    /// the machine then waits for the next operand.
    pub fn handle_operator(&mut self, next: Operator) {
        let input_value = parse_operand(&self.display_value);

        if self.operator.is_some() && self.waiting_for_second_operand {
            self.operator = Some(next);
            self.expression_value.pop();
            self.expression_value.push(next.symbol());
            return;
        }

        match (self.first_operand, self.operator) {
            (None, _) if !input_value.is_nan() => {
                self.first_operand = Some(input_value);
            }
            (first, Some(pending)) => {
                // an absent operand counts as zero, like a blank register
                let result = pending.apply(first.unwrap_or(0.0), input_value);
                self.display_value = format_result(result, self.options.precision);
                self.first_operand = Some(result);
            }
            (_, None) => {}
        }

        self.waiting_for_second_operand = true;
        self.operator = Some(next);
        self.expression_value.push(next.symbol());
    }

    /// Return every field to its startup default in one step.
    ///
    /// Settings are kept.
    pub fn reset(&mut self) {
        *self = Self::with_options(self.options);
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn expression_value(&self) -> &str {
        &self.expression_value
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    pub fn phase(&self) -> Phase {
        Phase::from_waiting(self.waiting_for_second_operand)
    }

    pub fn options(&self) -> StateOptions {
        self.options
    }
}
