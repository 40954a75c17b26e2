use leadvision::config::{self, AlertSettings, AppConfig, CONFIG_FILE_NAME};
use leadvision::decision::{AlertAction, AlertOutcome, AlertResult, DecisionSlot};
use leadvision::dispatch::{AlertDispatcher, CliArgs};
use leadvision::egui_app::controller::AlertController;
use leadvision::leads::{AlertRequest, demo_leads};
use tempfile::tempdir;

fn cli(args: &[&str]) -> CliArgs {
    CliArgs::parse(args.iter().map(|s| s.to_string()))
}

#[test]
fn accept_flow_from_cli_request_to_wire_result() {
    let args = cli(&["--name", "Acme Corp", "--location", "Austin, TX", "--score", "87"]);
    let mut dispatcher = AlertDispatcher::new(config::lead_pool(&AppConfig::default()));
    let request = dispatcher.next_request(&args);

    let view = leadvision::egui_app::view_model::AlertViewModel::from_request(&request);
    assert_eq!(view.title, "🔔 New Lead Alert!");
    assert_eq!(view.name, "Acme Corp");
    assert_eq!(view.location, "📍 Austin, TX");
    assert_eq!(view.score, "Match Score: 87%");

    let slot = DecisionSlot::new();
    let mut controller = AlertController::new(&request, slot.clone());
    assert!(controller.accept());

    let AlertOutcome::Decided(action) = slot.outcome() else {
        panic!("accept must produce a decision");
    };
    let line = serde_json::to_string(&AlertResult { action }).unwrap();
    assert_eq!(line, r#"{"action":"accept"}"#);
}

#[test]
fn reject_flow_with_blank_fields_keeps_prefixes() {
    let request = AlertRequest::default();
    let view = leadvision::egui_app::view_model::AlertViewModel::from_request(&request);
    assert_eq!(view.location, "📍 ");
    assert_eq!(view.score, "Match Score: %");

    let slot = DecisionSlot::new();
    let mut controller = AlertController::new(&request, slot.clone());
    assert!(controller.reject());
    assert_eq!(slot.outcome(), AlertOutcome::Decided(AlertAction::Reject));
}

#[test]
fn dismissal_is_undecided_not_reject() {
    let slot = DecisionSlot::new();
    let mut controller = AlertController::new(&AlertRequest::default(), slot.clone());
    assert!(controller.dismiss());
    assert_eq!(slot.outcome(), AlertOutcome::Undecided);
    assert_ne!(slot.outcome(), AlertOutcome::Decided(AlertAction::Reject));
}

#[test]
fn configured_pool_feeds_the_dispatcher() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let custom = AppConfig {
        alert: AlertSettings {
            fullscreen: false,
            always_on_top: false,
        },
        leads: Some(demo_leads()[..1].to_vec()),
    };
    config::save_to_path(&custom, &path).unwrap();

    let loaded = config::load_from_path(&path).unwrap();
    assert_eq!(loaded, custom);

    let mut dispatcher = AlertDispatcher::new(config::lead_pool(&loaded));
    let request = dispatcher.next_request(&CliArgs::default());
    assert_eq!(request.lead_name, "Rajesh Kumar");
    assert_eq!(request.match_score, "94");
}
