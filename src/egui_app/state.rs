//! Shared state types for the alert screen.

/// Lifecycle of the alert screen.
///
/// The screen starts displayed and terminates at most once; transition
/// attempts after termination are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    /// Visible, waiting for a user interaction event.
    Displayed,
    /// Closed; no further transitions are possible.
    Terminated,
}

/// How the screen reached its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Accept,
    Reject,
    /// Back navigation or window close without a decision.
    Dismiss,
}

impl Transition {
    pub fn label(self) -> &'static str {
        match self {
            Transition::Accept => "accept",
            Transition::Reject => "reject",
            Transition::Dismiss => "dismiss",
        }
    }
}
