//! Theme constants and one-time style application for the reader window.

use super::RedReaderApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0x17, 0x17, 0x17);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe5, 0xe5, 0xe5);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0xa3, 0xa3, 0xa3);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x52, 0x52, 0x52);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub(super) const COLOR_ERROR_TEXT: Color32 = Color32::from_rgb(0xfe, 0xca, 0xca);
pub(super) const COLOR_GUIDE: Color32 = Color32::from_rgb(0x17, 0x17, 0x17);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x26, 0x26, 0x26);

/// Point size of the flashed word.
pub(super) const WORD_FONT_SIZE: f32 = 64.0;

pub(super) fn word_font() -> FontId {
    FontId::new(WORD_FONT_SIZE, FontFamily::Monospace)
}

fn visuals(fill: Color32, stroke: Color32, fg: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::ZERO,
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

impl RedReaderApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_SECONDARY;
        style.visuals.panel_fill = COLOR_BG_PRIMARY;
        style.visuals.extreme_bg_color = COLOR_BG_SECONDARY;
        style.visuals.faint_bg_color = COLOR_BG_TERTIARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.window_corner_radius = CornerRadius::ZERO;
        style.visuals.hyperlink_color = COLOR_ACCENT;
        style.visuals.selection.bg_fill = COLOR_ACCENT.gamma_multiply(0.5);
        style.visuals.selection.stroke = Stroke::new(1.0, COLOR_ACCENT);
        style.visuals.text_edit_bg_color = Some(COLOR_BG_SECONDARY);

        style.visuals.widgets.noninteractive =
            visuals(COLOR_BG_PRIMARY, COLOR_BORDER, COLOR_TEXT_SECONDARY, 0.0);
        style.visuals.widgets.inactive =
            visuals(COLOR_BG_TERTIARY, COLOR_BORDER, COLOR_TEXT_PRIMARY, 0.0);
        style.visuals.widgets.hovered =
            visuals(COLOR_BG_TERTIARY, COLOR_ACCENT_HOVER, Color32::WHITE, 0.5);
        style.visuals.widgets.active = visuals(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);
        style.visuals.widgets.open = visuals(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.0);

        style.spacing.window_margin = Margin::same(16);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 34.0;
        style.spacing.slider_width = 480.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(40.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(14.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(14.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(11.0, FontFamily::Monospace),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}
