//! egui modules for the lead alert screen.

/// Screen lifecycle state machine.
pub mod state;
/// Pure request-to-display-text helpers.
pub mod view_model;
/// Controller owning the state machine and decision slot.
pub mod controller;
/// eframe renderer for the alert window.
pub mod ui;
