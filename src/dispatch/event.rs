//! Input events delivered by a keypad.

use crate::core::{InputKind, DECIMAL_POINT};

/// A discrete input event from some UI surface.
///
/// `kind` is `None` when the event did not come from a recognised input
/// button; the dispatcher ignores such events entirely.
pub trait InputEvent {
    /// Classification of the control that produced the event.
    fn kind(&self) -> Option<InputKind>;

    /// The control's label, such as `"7"`, `"+"` or `"."`.
    fn value(&self) -> &str;
}

/// A key press on the calculator keypad.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::InputKind;
/// use pocketcalc::dispatch::{InputEvent, KeyPress};
///
/// assert_eq!(KeyPress::from_label("7").kind(), Some(InputKind::Digit));
/// assert_eq!(KeyPress::from_label("*").kind(), Some(InputKind::Operator));
/// assert_eq!(KeyPress::from_label("AC").kind(), Some(InputKind::Clear));
/// assert_eq!(KeyPress::from_label("%").kind(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    kind: Option<InputKind>,
    value: String,
}

impl KeyPress {
    /// A press of a button of the given kind.
    pub fn new(kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            value: value.into(),
        }
    }

    pub fn digit(digit: char) -> Self {
        Self::new(InputKind::Digit, digit)
    }

    pub fn operator(symbol: char) -> Self {
        Self::new(InputKind::Operator, symbol)
    }

    pub fn decimal() -> Self {
        Self::new(InputKind::Decimal, DECIMAL_POINT)
    }

    pub fn clear() -> Self {
        Self::new(InputKind::Clear, "AC")
    }

    /// An event from something other than an input button.
    pub fn unrecognized(label: impl Into<String>) -> Self {
        Self {
            kind: None,
            value: label.into(),
        }
    }

    /// Classify a keypad label the way the keypad's buttons are laid out:
    /// `0`-`9` are digits, `+ - * / =` operators, `.` the decimal point and
    /// `AC`/`C` the all-clear key. Anything else is unrecognised.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        let mut chars = label.chars();

        match (chars.next(), chars.next()) {
            (Some(c @ '0'..='9'), None) => Self::digit(c),
            (Some(c @ ('+' | '-' | '*' | '/' | '=')), None) => Self::operator(c),
            (Some(DECIMAL_POINT), None) => Self::decimal(),
            _ if label.eq_ignore_ascii_case("ac") || label.eq_ignore_ascii_case("c") => {
                Self::new(InputKind::Clear, label)
            }
            _ => Self::unrecognized(label),
        }
    }
}

impl InputEvent for KeyPress {
    fn kind(&self) -> Option<InputKind> {
        self.kind
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl<E: InputEvent + ?Sized> InputEvent for &E {
    fn kind(&self) -> Option<InputKind> {
        (**self).kind()
    }

    fn value(&self) -> &str {
        (**self).value()
    }
}
