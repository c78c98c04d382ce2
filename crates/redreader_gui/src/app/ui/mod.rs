//! UI panel modules extracted from the main app update loop.

/// Progress, transport buttons and speed controls.
pub(super) mod controls;
/// Keyboard hint footer.
pub(super) mod footer;
/// Content-entry view shown before a session exists.
pub(super) mod input_panel;
/// Central panel switching between entry and reading views.
pub(super) mod main_panel;
/// Flashed-word display.
pub(super) mod reader_panel;
/// Summarize/simplify window.
pub(super) mod revision_panel;
/// Brand header with session actions.
pub(super) mod top_bar;
