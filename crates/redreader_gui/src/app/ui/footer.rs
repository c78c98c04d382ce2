//! Footer with keyboard hints.

use super::super::*;
use eframe::egui::{self, RichText};

const KEY_HINTS: &str =
    "SPACE play/pause   LEFT/RIGHT skip 10   UP/DOWN speed   F fullscreen   R/ESC close";

impl RedReaderApp {
    pub(crate) fn render_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let hint = if self.engine.has_session() {
                        KEY_HINTS
                    } else {
                        "Ctrl+Enter to start reading"
                    };
                    ui.label(RichText::new(hint).small().color(COLOR_TEXT_MUTED));
                });
            });
    }
}
