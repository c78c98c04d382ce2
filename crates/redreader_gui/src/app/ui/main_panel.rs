//! Central panel: content entry until a session exists, then the reader.
//!
//! Everything here is inert while the revision panel is open.

use super::super::*;
use eframe::egui;

impl RedReaderApp {
    pub(crate) fn render_main(&mut self, ctx: &egui::Context, now: Instant) {
        let interactive = !self.transport.panel_open();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                if self.engine.has_session() {
                    self.input_focused = false;
                    self.show_reader(ui, now);
                } else {
                    self.show_input(ui);
                }
            });
        });
    }
}
