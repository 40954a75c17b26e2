//! eframe renderer for the alert window.

use eframe::egui::{self, Align, Color32, Layout, RichText, Vec2};

use crate::decision::DecisionSlot;
use crate::egui_app::controller::AlertController;
use crate::leads::AlertRequest;

/// Smallest window that still fits the alert copy and both buttons.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(420.0, 340.0);

const ACCEPT_FILL: Color32 = Color32::from_rgb(34, 139, 74);
const REJECT_FILL: Color32 = Color32::from_rgb(178, 52, 52);

/// Renders the alert screen and drives the controller from input events.
pub struct AlertApp {
    controller: AlertController,
    visuals_set: bool,
    focus_requested: bool,
}

impl AlertApp {
    /// Bind a request and a shared decision slot to a fresh screen.
    pub fn new(request: &AlertRequest, slot: DecisionSlot) -> Self {
        Self {
            controller: AlertController::new(request, slot),
            visuals_set: false,
            focus_requested: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Color32::from_rgb(12, 12, 12);
        visuals.panel_fill = Color32::from_rgb(16, 16, 16);
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(16, 16, 16);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    // Desktop analog of the wake/turn-screen-on window flags: pull focus
    // once when the window first shows.
    fn request_initial_focus(&mut self, ctx: &egui::Context) {
        if self.focus_requested {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
        self.focus_requested = true;
    }

    fn handle_dismiss_events(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.dismiss();
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            self.controller.dismiss();
        }
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let mut accept = false;
        let mut reject = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.add_space(48.0);
                let view = self.controller.view();
                ui.label(
                    RichText::new(view.title)
                        .size(30.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.add_space(28.0);
                ui.label(RichText::new(&view.name).size(24.0).color(Color32::WHITE));
                ui.add_space(10.0);
                ui.label(
                    RichText::new(&view.location)
                        .size(18.0)
                        .color(Color32::from_rgb(185, 192, 200)),
                );
                ui.add_space(10.0);
                ui.label(
                    RichText::new(&view.score)
                        .size(18.0)
                        .color(Color32::from_rgb(127, 255, 212)),
                );
                ui.add_space(40.0);
                render_decision_buttons(ui, &mut accept, &mut reject);
            });
        });
        if accept {
            self.controller.accept();
        } else if reject {
            self.controller.reject();
        }
    }
}

fn render_decision_buttons(ui: &mut egui::Ui, accept: &mut bool, reject: &mut bool) {
    let button_size = Vec2::new(150.0, 46.0);
    ui.horizontal(|ui| {
        let total = button_size.x * 2.0 + ui.spacing().item_spacing.x;
        let pad = ((ui.available_width() - total) / 2.0).max(0.0);
        ui.add_space(pad);
        let accept_btn = egui::Button::new(
            RichText::new("✅ Accept").size(18.0).color(Color32::WHITE),
        )
        .fill(ACCEPT_FILL)
        .min_size(button_size);
        if ui.add(accept_btn).clicked() {
            *accept = true;
        }
        let reject_btn = egui::Button::new(
            RichText::new("❌ Reject").size(18.0).color(Color32::WHITE),
        )
        .fill(REJECT_FILL)
        .min_size(button_size);
        if ui.add(reject_btn).clicked() {
            *reject = true;
        }
    });
}

impl eframe::App for AlertApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.request_initial_focus(ctx);
        self.handle_dismiss_events(ctx);
        self.render_alert(ctx);
        if self.controller.take_close_request() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
