//! Content-entry view: paste text and start a session.

use super::super::*;
use eframe::egui::{self, RichText, TextEdit, TextStyle};
use redreader_core::PlaybackState;

const INPUT_MAX_WIDTH: f32 = 640.0;
const INPUT_HEIGHT: f32 = 260.0;

impl RedReaderApp {
    pub(crate) fn show_input(&mut self, ui: &mut egui::Ui) {
        let loading = self.engine.state() == PlaybackState::Loading;
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.heading(RichText::new("READ").strong());
            ui.heading(RichText::new("FASTER").strong().color(COLOR_ACCENT));
            ui.label(
                RichText::new("RAPID SERIAL VISUAL PRESENTATION")
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
            ui.add_space(32.0);
            ui.label(RichText::new("PASTE CONTENT").monospace().color(COLOR_ACCENT));

            let width = ui.available_width().min(INPUT_MAX_WIDTH);
            let response = ui.add_sized(
                [width, INPUT_HEIGHT],
                TextEdit::multiline(&mut self.input_text)
                    .hint_text("Paste your text here to speed read...")
                    .font(TextStyle::Monospace)
                    .interactive(!loading),
            );
            self.input_focused = response.has_focus();
            let shortcut = response.has_focus()
                && ui.input(|input| input.modifiers.command && input.key_pressed(egui::Key::Enter));

            ui.add_space(16.0);
            let can_submit = !loading && !self.input_text.trim().is_empty();
            let label = if loading {
                "PROCESSING"
            } else {
                "START READING"
            };
            let clicked = ui
                .add_enabled(can_submit, egui::Button::new(label))
                .clicked();
            if loading {
                ui.spinner();
            }
            if can_submit && (clicked || shortcut) {
                self.submit_input();
            }

            if let Some(error) = &self.input_error {
                ui.add_space(16.0);
                ui.label(RichText::new(format!("Error: {}", error)).color(COLOR_ERROR_TEXT));
            }
        });
    }
}
