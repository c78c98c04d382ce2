//! Top bar with the brand mark and session actions.

use super::super::*;
use eframe::egui::{self, RichText};

impl RedReaderApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let interactive = !self.transport.panel_open();
        egui::TopBottomPanel::top("top_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (mark, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(mark, 0.0, COLOR_ACCENT);
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(RichText::new("RED").monospace().strong());
                    ui.label(RichText::new("READER").monospace().strong().color(COLOR_ACCENT));

                    if !self.engine.has_session() {
                        return;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(interactive, |ui| {
                            ui.spacing_mut().item_spacing.x = 12.0;
                            if ui.button("CLOSE").on_hover_text("Close (Esc)").clicked() {
                                self.dispatch(Intent::Reset, Instant::now());
                            }
                            if ui.button("AI TOOLS").clicked() {
                                self.dispatch(Intent::OpenPanel, Instant::now());
                            }
                        });
                    });
                });
            });
    }
}
