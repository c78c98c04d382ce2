//! egui shell around the playback engine.

mod display;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle, CoreCmd, CoreEvent};
use display::ViewportDisplay;
use eframe::egui;
use redreader_core::constants::SIMPLIFIED_SESSION_TITLE;
use redreader_core::revision::{gateway_from_config, RevisionTracker};
use redreader_core::text::tokenize;
use redreader_core::transport::KeyContext;
use redreader_core::{
    Config, Intent, LoadOutcome, PlaybackEngine, ReaderError, RevisionKind, TickOutcome,
    Transport, TransportEffect, TransportKey,
};
use std::io;
use std::time::{Duration, Instant};
use style::*;
use tracing::{debug, info, warn};

pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 720.0];
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [560.0, 480.0];
const BACKEND_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Native egui application shell.
///
/// Owns the engine and talks to the revision worker via channels so the
/// `update` loop never blocks on network I/O.
pub(crate) struct RedReaderApp {
    backend: BackendHandle,
    engine: PlaybackEngine,
    transport: Transport,
    display: ViewportDisplay,
    revisions: RevisionTracker,
    loads: RevisionTracker,
    clean_on_submit: bool,
    input_text: String,
    input_error: Option<String>,
    input_focused: bool,
    panel: RevisionPanel,
    style_applied: bool,
}

/// Revision panel contents; reset whenever the panel closes.
#[derive(Debug, Default)]
struct RevisionPanel {
    result: Option<RevisionResult>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
struct RevisionResult {
    kind: RevisionKind,
    text: String,
}

impl RedReaderApp {
    /// Build the app and start its backend worker.
    ///
    /// # Errors
    /// Returns the I/O error when the worker thread cannot be spawned.
    pub(crate) fn new(config: &Config) -> io::Result<Self> {
        let backend = spawn_backend(gateway_from_config(config))?;
        Ok(Self::with_backend(backend, config))
    }

    fn with_backend(backend: BackendHandle, config: &Config) -> Self {
        Self {
            backend,
            engine: PlaybackEngine::new(config.initial_wpm),
            transport: Transport::default(),
            display: ViewportDisplay::default(),
            revisions: RevisionTracker::default(),
            loads: RevisionTracker::default(),
            clean_on_submit: config.clean_on_submit,
            input_text: String::new(),
            input_error: None,
            input_focused: false,
            panel: RevisionPanel::default(),
            style_applied: false,
        }
    }

    /// Start a session from the input field.
    fn submit_input(&mut self) {
        self.revisions.cancel();
        self.panel = RevisionPanel::default();
        if tokenize(&self.input_text).is_empty() {
            self.loads.cancel();
            self.engine.reset();
            self.input_error = Some(ReaderError::EmptyContent.to_string());
            return;
        }
        self.input_error = None;
        if !self.clean_on_submit {
            self.loads.cancel();
            if let Err(err) = self.engine.submit(&self.input_text) {
                self.input_error = Some(err.to_string());
            }
            return;
        }

        self.engine.begin_load();
        let ticket = self.loads.issue(RevisionKind::Clean);
        let cmd = CoreCmd::Clean {
            ticket,
            raw: self.input_text.clone(),
        };
        if self.backend.cmd_tx.send(cmd).is_err() {
            // Worker gone: load the raw text directly.
            warn!("backend unavailable; loading raw text");
            self.loads.cancel();
            let raw = self.input_text.clone();
            self.finish_load(raw.clone(), &raw);
        }
    }

    fn finish_load(&mut self, raw: String, text: &str) {
        match self.engine.complete_load(raw, text) {
            Ok(LoadOutcome::Loaded) => self.input_error = None,
            Ok(LoadOutcome::Discarded) => debug!("load finished after reset; ignored"),
            Err(err) => self.input_error = Some(err.to_string()),
        }
    }

    /// Route an intent through the transport and react to its effect.
    fn dispatch(&mut self, intent: Intent, now: Instant) -> TransportEffect {
        let effect = self
            .transport
            .dispatch(intent, &mut self.engine, &mut self.display, now);
        match effect {
            TransportEffect::PanelClosed => {
                self.revisions.cancel();
                self.panel = RevisionPanel::default();
            }
            TransportEffect::SessionReset => {
                self.revisions.cancel();
                self.loads.cancel();
                self.panel = RevisionPanel::default();
                self.input_error = None;
            }
            _ => {}
        }
        effect
    }

    /// Ask the worker for a revision of the session's source text.
    fn request_revision(&mut self, kind: RevisionKind) {
        let Some(text) = self.engine.original_text().map(str::to_string) else {
            return;
        };
        let ticket = self.revisions.issue(kind);
        self.panel = RevisionPanel::default();
        info!(?kind, "revision requested");
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::Revise { ticket, kind, text })
            .is_err()
        {
            self.revisions.cancel();
            self.panel.error =
                Some(ReaderError::revision(kind, "background worker stopped").to_string());
        }
    }

    /// Replace the reading text with the simplified result and close the panel.
    fn apply_simplified(&mut self, now: Instant) {
        let Some(result) = self.panel.result.clone() else {
            return;
        };
        if result.kind != RevisionKind::Simplify {
            return;
        }
        match self
            .engine
            .apply_revision(tokenize(&result.text), SIMPLIFIED_SESSION_TITLE)
        {
            Ok(_) => {
                self.dispatch(Intent::ClosePanel, now);
            }
            Err(err) => self.panel.error = Some(err.to_string()),
        }
    }

    fn poll_backend(&mut self) {
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::Revised {
                ticket,
                kind,
                result,
            } => {
                if !self.revisions.accept(ticket) {
                    debug!(ticket = ticket.id(), "dropping stale revision result");
                    return;
                }
                match result {
                    Ok(text) => self.panel.result = Some(RevisionResult { kind, text }),
                    Err(err) => self.panel.error = Some(err.to_string()),
                }
            }
            CoreEvent::Cleaned { ticket, raw, text } => {
                if !self.loads.accept(ticket) {
                    debug!(ticket = ticket.id(), "dropping stale clean result");
                    return;
                }
                self.finish_load(raw, &text);
            }
        }
    }

    /// Translate this frame's key presses into transport intents.
    fn handle_keyboard(&mut self, ctx: &egui::Context, now: Instant) {
        let presses: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });

        for (key, modifiers) in presses {
            let Some(transport_key) = transport_key(key) else {
                continue;
            };
            let key_ctx = KeyContext {
                input_focused: self.input_focused,
                command_modifier: modifiers.command || modifiers.ctrl || modifiers.alt,
            };
            let Some(intent) = self
                .transport
                .resolve_key(transport_key, key_ctx, &self.engine)
            else {
                continue;
            };
            ctx.input_mut(|input| input.consume_key(modifiers, key));
            self.dispatch(intent, now);
        }
    }

    fn sync_fullscreen(&mut self, ctx: &egui::Context) {
        let fullscreen = ctx.input(|input| input.viewport().fullscreen.unwrap_or(false));
        self.transport.on_fullscreen_changed(fullscreen);
    }

    fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if let Some(wait) = self.engine.time_until_tick(now) {
            return Some(wait);
        }
        (self.revisions.is_pending() || self.loads.is_pending()).then_some(BACKEND_POLL_INTERVAL)
    }
}

fn transport_key(key: egui::Key) -> Option<TransportKey> {
    let mapped = match key {
        egui::Key::Space => TransportKey::Space,
        egui::Key::ArrowRight => TransportKey::ArrowRight,
        egui::Key::ArrowLeft => TransportKey::ArrowLeft,
        egui::Key::ArrowUp => TransportKey::ArrowUp,
        egui::Key::ArrowDown => TransportKey::ArrowDown,
        egui::Key::F => TransportKey::F,
        egui::Key::R => TransportKey::R,
        egui::Key::Escape => TransportKey::Escape,
        _ => return None,
    };
    Some(mapped)
}

impl eframe::App for RedReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        self.sync_fullscreen(ctx);
        self.poll_backend();

        let now = Instant::now();
        self.handle_keyboard(ctx, now);
        if self.engine.tick(now) == TickOutcome::Finished {
            debug!("playback finished");
        }

        let fullscreen = self.transport.is_fullscreen();
        if !fullscreen {
            self.render_top_bar(ctx);
            self.render_footer(ctx);
        }
        self.render_main(ctx, now);
        if self.transport.panel_open() {
            self.render_revision_panel(ctx, now);
        }
        self.display.flush(ctx);

        if let Some(wait) = self.repaint_after(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests;
