//! Phase trace for diagnosing how input moved the state machine.
//!
//! The trace records phases, not calculations: each entry says which kind
//! of input moved the machine from one [`Phase`] to another and when.
//! It is bounded, so a long session keeps only the most recent entries.

use super::input::InputKind;
use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of entries a trace keeps unless configured otherwise.
pub const DEFAULT_TRACE_CAPACITY: usize = 64;

/// Record of one applied input.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{InputKind, Phase, PhaseChange};
/// use chrono::Utc;
///
/// let change = PhaseChange {
///     from: Phase::Idle,
///     to: Phase::OperandPending,
///     trigger: InputKind::Operator,
///     at: Utc::now(),
/// };
/// assert!(change.is_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseChange {
    /// Phase before the input was applied
    pub from: Phase,
    /// Phase after the input was applied
    pub to: Phase,
    /// Kind of input that was applied
    pub trigger: InputKind,
    /// When the input was applied
    pub at: DateTime<Utc>,
}

impl PhaseChange {
    /// True when the input moved the machine to a different phase.
    pub fn is_transition(&self) -> bool {
        self.from != self.to
    }
}

/// Bounded, ordered trace of phase changes.
///
/// The trace is immutable: [`PhaseTrace::record`] returns a new trace with
/// the change appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{InputKind, Phase, PhaseChange, PhaseTrace};
/// use chrono::Utc;
///
/// let trace = PhaseTrace::new();
/// let trace = trace.record(PhaseChange {
///     from: Phase::Idle,
///     to: Phase::OperandPending,
///     trigger: InputKind::Operator,
///     at: Utc::now(),
/// });
/// let trace = trace.record(PhaseChange {
///     from: Phase::OperandPending,
///     to: Phase::Idle,
///     trigger: InputKind::Digit,
///     at: Utc::now(),
/// });
///
/// assert_eq!(trace.path(), vec![Phase::Idle, Phase::OperandPending, Phase::Idle]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseTrace {
    changes: VecDeque<PhaseChange>,
    capacity: usize,
}

impl Default for PhaseTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTrace {
    /// Create an empty trace with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRACE_CAPACITY)
    }

    /// Create an empty trace keeping at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            changes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a change, returning a new trace.
    ///
    /// When the trace is full the oldest entry is dropped.
    pub fn record(&self, change: PhaseChange) -> Self {
        let mut changes = self.changes.clone();
        if changes.len() == self.capacity {
            changes.pop_front();
        }
        changes.push_back(change);
        Self {
            changes,
            capacity: self.capacity,
        }
    }

    /// Phases traversed: the `from` phase of the oldest entry, then the
    /// `to` phase of every entry.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.front() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|change| change.to));
        path
    }

    /// Time between the oldest and newest entry, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    pub fn changes(&self) -> impl Iterator<Item = &PhaseChange> {
        self.changes.iter()
    }

    pub fn last(&self) -> Option<&PhaseChange> {
        self.changes.back()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
