#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based LeadVision alert UI.

use eframe::egui;
use leadvision::config;
use leadvision::decision::{AlertOutcome, AlertResult, DecisionSlot};
use leadvision::dispatch::{AlertDispatcher, CliArgs};
use leadvision::egui_app::ui::{AlertApp, MIN_VIEWPORT_SIZE};
use leadvision::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse(std::env::args().skip(1));
    let default_filter = if args.verbose { "debug" } else { "info" };
    if let Err(err) = logging::init(default_filter) {
        eprintln!("Logging disabled: {err}");
    }
    for flag in &args.unknown {
        tracing::warn!(flag = flag.as_str(), "Ignoring unknown argument");
    }

    let config = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default config: {err}");
        config::AppConfig::default()
    });

    let request = AlertDispatcher::new(config::lead_pool(&config)).next_request(&args);
    let slot = DecisionSlot::new();
    let screen_slot = slot.clone();

    let mut viewport = egui::ViewportBuilder::default().with_min_inner_size(MIN_VIEWPORT_SIZE);
    if !args.windowed {
        if config.alert.fullscreen {
            viewport = viewport.with_fullscreen(true);
        }
        if config.alert.always_on_top {
            viewport = viewport.with_always_on_top();
        }
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "LeadVision",
        native_options,
        Box::new(move |_cc| Ok(Box::new(AlertApp::new(&request, screen_slot)))),
    )?;

    emit_result(&slot)
}

/// Report the outcome to the invoking process.
///
/// A decision becomes one JSON line on stdout and the process exits 0; a
/// dismissal prints nothing, which callers must read as "no decision".
fn emit_result(slot: &DecisionSlot) -> Result<(), Box<dyn std::error::Error>> {
    match slot.outcome() {
        AlertOutcome::Decided(action) => {
            let line = serde_json::to_string(&AlertResult { action })?;
            println!("{line}");
            tracing::info!(action = action.as_str(), "Alert decided");
        }
        AlertOutcome::Undecided => {
            tracing::info!("Alert dismissed without a decision");
        }
    }
    Ok(())
}
