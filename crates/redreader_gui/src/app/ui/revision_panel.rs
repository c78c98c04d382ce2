//! Summarize/simplify window shown while the transport panel is open.

use super::super::*;
use eframe::egui::{self, RichText};

const PANEL_WIDTH: f32 = 560.0;
const RESULT_MAX_HEIGHT: f32 = 240.0;

/// What the user picked this frame; applied after the window closes over `self`.
enum PanelAction {
    Request(RevisionKind),
    Back,
    Apply,
    Close,
}

impl RedReaderApp {
    pub(crate) fn render_revision_panel(&mut self, ctx: &egui::Context, now: Instant) {
        let mut action = None;
        egui::Window::new("AI TOOLS")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(PANEL_WIDTH)
            .show(ctx, |ui| {
                if self.revisions.is_pending() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.spinner();
                        ui.label(
                            RichText::new("PROCESSING WITH GEMINI...")
                                .small()
                                .color(COLOR_TEXT_MUTED),
                        );
                        ui.add_space(24.0);
                    });
                } else if let Some(result) = &self.panel.result {
                    egui::ScrollArea::vertical()
                        .max_height(RESULT_MAX_HEIGHT)
                        .show(ui, |ui| {
                            for line in result.text.lines() {
                                ui.label(
                                    RichText::new(line).monospace().color(COLOR_TEXT_SECONDARY),
                                );
                            }
                        });
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("BACK").clicked() {
                            action = Some(PanelAction::Back);
                        }
                        if result.kind == RevisionKind::Simplify {
                            if ui.button(RichText::new("READ THIS").strong()).clicked() {
                                action = Some(PanelAction::Apply);
                            }
                        } else if ui.button("DONE").clicked() {
                            action = Some(PanelAction::Close);
                        }
                    });
                } else {
                    ui.horizontal(|ui| {
                        if ui
                            .button("SUMMARIZE")
                            .on_hover_text("Get key bullet points before reading.")
                            .clicked()
                        {
                            action = Some(PanelAction::Request(RevisionKind::Summarize));
                        }
                        if ui
                            .button("SIMPLIFY TEXT")
                            .on_hover_text("Rewrite content for easier speed reading.")
                            .clicked()
                        {
                            action = Some(PanelAction::Request(RevisionKind::Simplify));
                        }
                    });
                }

                if let Some(error) = &self.panel.error {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(COLOR_ERROR_TEXT));
                }

                ui.separator();
                if ui.button("CLOSE").on_hover_text("Close (Esc)").clicked() {
                    action = Some(PanelAction::Close);
                }
            });

        match action {
            Some(PanelAction::Request(kind)) => self.request_revision(kind),
            Some(PanelAction::Back) => self.panel = RevisionPanel::default(),
            Some(PanelAction::Apply) => self.apply_simplified(now),
            Some(PanelAction::Close) => {
                self.dispatch(Intent::ClosePanel, now);
            }
            None => {}
        }
    }
}
