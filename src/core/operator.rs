//! Operators and digits accepted by the calculator state machine.
//!
//! Both types are closed: every operator the keypad offers is a variant of
//! [`Operator`], and [`Digit`] can only hold `0..=9`. Converting a raw key
//! label into one of them is the only fallible step in the core.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary operator, or `=` which forces evaluation of the pending one.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::Operator;
///
/// assert_eq!(Operator::Multiply.apply(6.0, 7.0), 42.0);
/// assert_eq!(Operator::Equals.apply(6.0, 7.0), 7.0);
/// assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "=")]
    Equals,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
        Operator::Equals,
    ];

    /// The key symbol as it appears in the expression log.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Equals => '=',
        }
    }

    /// Combine two operands.
    ///
    /// IEEE-754 semantics apply unchanged: dividing by zero yields an
    /// infinity or NaN rather than an error. `Equals` passes the right-hand
    /// operand through, so pressing `=` after a result leaves it intact.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Equals => rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            '=' => Ok(Self::Equals),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

/// A single decimal digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` unless `value` is in `0..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or_else(|| CalcError::InvalidDigit(c.to_string()))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| CalcError::InvalidDigit(value.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl FromStr for Digit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CalcError::InvalidDigit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_covers_every_operator() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.apply(3.0, 2.0), 1.5);
        assert_eq!(Operator::Equals.apply(2.0, 3.0), 3.0);
    }

    #[test]
    fn divide_by_zero_is_not_an_error() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn symbols_parse_back_to_operators() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.symbol()), Ok(op));
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn unknown_operator_is_rejected() {
        assert_eq!(
            "%".parse::<Operator>(),
            Err(CalcError::UnknownOperator("%".to_string()))
        );
        assert!("++".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn operator_serializes_as_symbol() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"*\"");
        let op: Operator = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(op, Operator::Subtract);
    }

    #[test]
    fn digit_accepts_only_zero_through_nine() {
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert!(Digit::new(10).is_none());
        assert_eq!("7".parse::<Digit>().map(Digit::value), Ok(7));
        assert_eq!(
            Digit::try_from('x'),
            Err(CalcError::InvalidDigit("x".to_string()))
        );
        assert!("12".parse::<Digit>().is_err());
    }

    #[test]
    fn digit_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<Digit>("4").is_ok());
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
