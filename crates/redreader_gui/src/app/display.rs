//! Fullscreen requests routed to the native viewport.

use eframe::egui;
use redreader_core::DisplayMode;

/// Collects the latest fullscreen request until the next frame flush.
///
/// The window reports the actual mode back through `ViewportInfo`, which the
/// app mirrors into the transport.
#[derive(Debug, Default)]
pub(super) struct ViewportDisplay {
    requested: Option<bool>,
}

impl ViewportDisplay {
    #[cfg(test)]
    pub(super) fn requested(&self) -> Option<bool> {
        self.requested
    }

    /// Send the pending request, if any, to the viewport.
    pub(super) fn flush(&mut self, ctx: &egui::Context) {
        if let Some(fullscreen) = self.requested.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        }
    }
}

impl DisplayMode for ViewportDisplay {
    fn enter_fullscreen(&mut self) {
        self.requested = Some(true);
    }

    fn exit_fullscreen(&mut self) {
        self.requested = Some(false);
    }
}
