//! Controller owning the alert state machine and the decision slot.

use crate::decision::{AlertAction, DecisionSlot};
use crate::egui_app::state::{ScreenState, Transition};
use crate::egui_app::view_model::AlertViewModel;
use crate::leads::AlertRequest;

/// Maintains screen state and bridges user input to the decision slot.
///
/// Transitions are guarded so that exactly one of accept, reject, or
/// dismiss takes effect per screen instance. A close request is latched
/// for the renderer to pick up once per transition.
pub struct AlertController {
    view: AlertViewModel,
    state: ScreenState,
    slot: DecisionSlot,
    close_requested: bool,
}

impl AlertController {
    /// Bind a request to a fresh, displayed screen.
    pub fn new(request: &AlertRequest, slot: DecisionSlot) -> Self {
        Self {
            view: AlertViewModel::from_request(request),
            state: ScreenState::Displayed,
            slot,
            close_requested: false,
        }
    }

    /// Display texts for the renderer.
    pub fn view(&self) -> &AlertViewModel {
        &self.view
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// The user tapped Accept. Returns false if the screen already terminated.
    pub fn accept(&mut self) -> bool {
        self.terminate(Transition::Accept)
    }

    /// The user tapped Reject. Returns false if the screen already terminated.
    pub fn reject(&mut self) -> bool {
        self.terminate(Transition::Reject)
    }

    /// The screen is going away without a decision (Escape or window close).
    pub fn dismiss(&mut self) -> bool {
        self.terminate(Transition::Dismiss)
    }

    /// Whether the renderer should close the window; resets on read.
    pub fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }

    fn terminate(&mut self, transition: Transition) -> bool {
        if self.state == ScreenState::Terminated {
            tracing::debug!(
                transition = transition.label(),
                "Ignoring transition after termination"
            );
            return false;
        }
        match transition {
            Transition::Accept => {
                self.slot.record(AlertAction::Accept);
            }
            Transition::Reject => {
                self.slot.record(AlertAction::Reject);
            }
            Transition::Dismiss => {}
        }
        self.state = ScreenState::Terminated;
        self.close_requested = true;
        tracing::info!(transition = transition.label(), "Alert screen terminated");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::AlertOutcome;

    fn controller_with_slot() -> (AlertController, DecisionSlot) {
        let slot = DecisionSlot::new();
        let request = AlertRequest::new("Acme Corp", "Austin, TX", "87");
        (AlertController::new(&request, slot.clone()), slot)
    }

    #[test]
    fn accept_records_decision_and_terminates() {
        let (mut controller, slot) = controller_with_slot();
        assert!(controller.accept());
        assert_eq!(controller.state(), ScreenState::Terminated);
        assert_eq!(slot.outcome(), AlertOutcome::Decided(AlertAction::Accept));
        assert!(controller.take_close_request());
        assert!(!controller.take_close_request());
    }

    #[test]
    fn reject_records_decision_regardless_of_field_values() {
        let slot = DecisionSlot::new();
        let mut controller = AlertController::new(&AlertRequest::default(), slot.clone());
        assert!(controller.reject());
        assert_eq!(slot.outcome(), AlertOutcome::Decided(AlertAction::Reject));
    }

    #[test]
    fn dismiss_leaves_slot_undecided() {
        let (mut controller, slot) = controller_with_slot();
        assert!(controller.dismiss());
        assert_eq!(controller.state(), ScreenState::Terminated);
        assert_eq!(slot.outcome(), AlertOutcome::Undecided);
    }

    #[test]
    fn double_tap_keeps_the_first_decision() {
        let (mut controller, slot) = controller_with_slot();
        assert!(controller.accept());
        assert!(!controller.reject());
        assert!(!controller.dismiss());
        assert_eq!(slot.outcome(), AlertOutcome::Decided(AlertAction::Accept));
    }

    #[test]
    fn dismiss_after_decision_does_not_clear_it() {
        let (mut controller, slot) = controller_with_slot();
        controller.reject();
        controller.dismiss();
        assert_eq!(slot.outcome(), AlertOutcome::Decided(AlertAction::Reject));
    }
}
