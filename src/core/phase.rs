//! Entry phases of the calculator state machine.
//!
//! The calculator is in one of two phases. In [`Phase::Idle`] digits extend
//! the operand on display. In [`Phase::OperandPending`] an operator has just
//! been chosen and the next digit or decimal point starts a fresh operand.
//!
//! ```text
//!            operator                     operator (swap)
//!   Idle ─────────────────▶ OperandPending ◀──────┐
//!    ▲                         │    └──────────────┘
//!    └──── digit / decimal ────┘
//!   any ── clear ──▶ Idle
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current phase of operand entry.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{CalculatorState, Operator, Phase};
///
/// let mut state = CalculatorState::default();
/// assert_eq!(state.phase(), Phase::Idle);
///
/// state.handle_operator(Operator::Add);
/// assert_eq!(state.phase(), Phase::OperandPending);
/// assert_eq!(state.phase().name(), "OperandPending");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No operand is awaited; digits append to the display.
    #[default]
    Idle,
    /// An operator was just chosen; the next entry replaces the display.
    OperandPending,
}

impl Phase {
    /// Phase name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::OperandPending => "OperandPending",
        }
    }

    /// Phase implied by the "waiting for second operand" flag.
    pub fn from_waiting(waiting_for_second_operand: bool) -> Self {
        if waiting_for_second_operand {
            Self::OperandPending
        } else {
            Self::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::OperandPending)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
