//! Classification of keypad input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of control a key press came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Operator,
    Decimal,
    Clear,
    Digit,
}

impl InputKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Decimal => "decimal",
            Self::Clear => "clear",
            Self::Digit => "digit",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
