//! Decision channel between the alert screen and its caller.
//!
//! The screen terminates through exactly one of accept, reject, or dismiss.
//! Accept and reject write into a single-use slot shared with the caller;
//! dismissal leaves the slot empty, which the caller must treat as a valid
//! "no decision" outcome rather than an error.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// The binary decision taken on the alert screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertAction {
    Accept,
    Reject,
}

impl AlertAction {
    /// Wire-form label used in logs and the result payload.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertAction::Accept => "accept",
            AlertAction::Reject => "reject",
        }
    }
}

/// What the caller observes once the screen has terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertOutcome {
    /// The user tapped one of the two controls.
    Decided(AlertAction),
    /// The screen was dismissed without a decision. Distinct from reject.
    Undecided,
}

/// Serialized result emitted toward the invoking process on a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertResult {
    pub action: AlertAction,
}

/// Single-use, write-once output slot shared between screen and caller.
///
/// The first write wins; later writes are ignored. Cloning shares the slot
/// (main-thread only, like the rest of the UI).
#[derive(Clone, Debug, Default)]
pub struct DecisionSlot {
    inner: Rc<RefCell<Option<AlertAction>>>,
}

impl DecisionSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision. Returns false if one was already recorded.
    pub fn record(&self, action: AlertAction) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.is_some() {
            return false;
        }
        *inner = Some(action);
        true
    }

    /// Read the outcome as the caller sees it.
    pub fn outcome(&self) -> AlertOutcome {
        match *self.inner.borrow() {
            Some(action) => AlertOutcome::Decided(action),
            None => AlertOutcome::Undecided,
        }
    }
}
