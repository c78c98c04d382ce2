//! Progress readouts, seek slider, transport buttons and speed controls.

use super::super::*;
use eframe::egui::{self, DragValue, RichText, Slider};
use redreader_core::constants::{MAX_WPM, MIN_WPM};

const CONTROLS_MAX_WIDTH: f32 = 640.0;

impl RedReaderApp {
    pub(crate) fn show_controls(&mut self, ui: &mut egui::Ui, now: Instant) {
        let width = ui.available_width().min(CONTROLS_MAX_WIDTH);
        ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
            ui.set_width(width);
            self.show_progress(ui);
            ui.add_space(24.0);
            self.show_transport_buttons(ui, now);
            ui.add_space(24.0);
            self.show_speed(ui, now);
        });
    }

    fn show_progress(&mut self, ui: &mut egui::Ui) {
        let progress = self.engine.progress_percent();
        ui.horizontal(|ui| {
            ui.label(RichText::new("PROGRESS").small().color(COLOR_TEXT_MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}%", progress.round()))
                        .small()
                        .color(COLOR_TEXT_MUTED),
                );
            });
        });

        let mut percent = progress;
        let slider_width = ui.available_width();
        ui.spacing_mut().slider_width = slider_width;
        let slider = ui.add(Slider::new(&mut percent, 0.0..=100.0).show_value(false));
        if slider.changed() {
            self.engine.seek_to_fraction(percent);
        }

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} / {} words",
                    self.engine.current_index(),
                    self.engine.token_count()
                ))
                .small()
                .color(COLOR_TEXT_MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("~{} min left", self.engine.minutes_remaining()))
                        .small()
                        .color(COLOR_TEXT_MUTED),
                );
            });
        });
    }

    fn show_transport_buttons(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 360.0).max(0.0) / 2.0);
                if ui.button("RESTART").on_hover_text("Back to the first word").clicked() {
                    self.engine.restart();
                }
                let play_label = if self.engine.is_reading() {
                    "PAUSE"
                } else {
                    "PLAY"
                };
                let play = egui::Button::new(RichText::new(play_label).strong())
                    .min_size(egui::vec2(96.0, 48.0));
                if ui.add(play).on_hover_text("Play/Pause (Space)").clicked() {
                    self.dispatch(Intent::TogglePlay, now);
                }
                let fullscreen_label = if self.transport.is_fullscreen() {
                    "EXIT FULLSCREEN"
                } else {
                    "FULLSCREEN"
                };
                if ui
                    .button(fullscreen_label)
                    .on_hover_text("Toggle Fullscreen (F)")
                    .clicked()
                {
                    self.dispatch(Intent::ToggleFullscreen, now);
                }
            });
        });
    }

    fn show_speed(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("SPEED (UP/DOWN)")
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 200.0).max(0.0) / 2.0);
                if ui
                    .button("-")
                    .on_hover_text("Decrease Speed (Down Arrow)")
                    .clicked()
                {
                    self.dispatch(Intent::SpeedDown, now);
                }
                let mut wpm = self.engine.wpm();
                let field = ui.add(
                    DragValue::new(&mut wpm)
                        .range(MIN_WPM..=MAX_WPM)
                        .speed(5.0),
                );
                if field.changed() {
                    self.engine.set_speed(wpm, now);
                }
                if ui
                    .button("+")
                    .on_hover_text("Increase Speed (Up Arrow)")
                    .clicked()
                {
                    self.dispatch(Intent::SpeedUp, now);
                }
            });
            ui.label(RichText::new("WPM").small().color(COLOR_TEXT_MUTED));
        });
    }
}
