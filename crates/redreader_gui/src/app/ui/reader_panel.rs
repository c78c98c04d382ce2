//! Flashed-word display with the pivot letter pinned to the center line.

use super::super::*;
use eframe::egui::{self, Align2, Painter, Rangef, Rect, RichText, Stroke};
use redreader_core::orp::{self, OrpSplit};

const DISPLAY_HEIGHT: f32 = 220.0;
const GUIDE_HALF_HEIGHT: f32 = 32.0;

impl RedReaderApp {
    pub(crate) fn show_reader(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            let title = self.engine.title().unwrap_or_default().to_uppercase();
            let title_color = if self.engine.is_reading() {
                COLOR_TEXT_MUTED
            } else {
                COLOR_TEXT_SECONDARY
            };
            ui.add(egui::Label::new(RichText::new(title).small().color(title_color)).truncate());

            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), DISPLAY_HEIGHT),
                egui::Sense::hover(),
            );
            let split = self.engine.current_token().map(orp::split).unwrap_or_default();
            paint_word(ui.painter(), rect, &split);

            ui.add_space(24.0);
            self.show_controls(ui, now);
        });
    }
}

/// Paint guides and the split word so the pivot sits on the vertical guide.
fn paint_word(painter: &Painter, rect: Rect, split: &OrpSplit<'_>) {
    let center = rect.center();
    painter.rect_filled(rect, 0.0, COLOR_BG_PRIMARY);
    painter.hline(rect.x_range(), center.y, Stroke::new(1.0, COLOR_GUIDE));
    painter.vline(
        center.x,
        Rangef::new(center.y - GUIDE_HALF_HEIGHT, center.y + GUIDE_HALF_HEIGHT),
        Stroke::new(1.0, COLOR_GUIDE),
    );

    if split.is_empty() {
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "READY",
            egui::FontId::monospace(14.0),
            COLOR_TEXT_MUTED,
        );
        return;
    }

    let font = word_font();
    let pivot = painter.layout_no_wrap(split.pivot.to_string(), font.clone(), COLOR_ACCENT);
    let pivot_rect = Align2::CENTER_CENTER.anchor_size(center, pivot.size());
    painter.galley(pivot_rect.min, pivot, COLOR_ACCENT);
    painter.text(
        egui::pos2(pivot_rect.left(), center.y),
        Align2::RIGHT_CENTER,
        split.left,
        font.clone(),
        COLOR_TEXT_PRIMARY,
    );
    painter.text(
        egui::pos2(pivot_rect.right(), center.y),
        Align2::LEFT_CENTER,
        split.right,
        font,
        COLOR_TEXT_PRIMARY,
    );
}
