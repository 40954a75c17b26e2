//! Library exports for reuse in integration tests.
/// Lead data model and rotation pool.
pub mod leads;
/// Decision channel between the alert screen and its caller.
pub mod decision;
/// Alert request dispatch and CLI flags.
pub mod dispatch;
/// Persisted application settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Application directory helpers.
pub mod app_dirs;
/// Logging setup.
pub mod logging;
