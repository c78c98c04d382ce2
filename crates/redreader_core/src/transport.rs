//! Keyboard/UI intent routing into the playback engine.
//!
//! [`Transport`] turns user intents into engine calls. Its own state is
//! limited to whether the revision panel is open and a mirror of the
//! platform fullscreen flag; the platform side is reached through
//! [`DisplayMode`].

use crate::constants::{SKIP_TOKENS, WPM_STEP};
use crate::engine::{PlaybackEngine, PlaybackState};
use std::time::Instant;
use tracing::debug;

/// External display-mode collaborator (window fullscreen).
pub trait DisplayMode {
    fn enter_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);
}

/// Keys the transport listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKey {
    Space,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    F,
    R,
    Escape,
}

/// User intents understood by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TogglePlay,
    SkipForward,
    SkipBack,
    SpeedUp,
    SpeedDown,
    ToggleFullscreen,
    ExitFullscreen,
    Reset,
    OpenPanel,
    ClosePanel,
}

/// Focus/ownership snapshot used to decide whether a key is ours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// The content-entry field currently owns keyboard input.
    pub input_focused: bool,
    /// Ctrl/Cmd/Alt is held; the chord belongs to the platform.
    pub command_modifier: bool,
}

/// What a dispatched intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEffect {
    /// The intent was guarded out.
    Ignored,
    PlaybackToggled,
    Moved,
    SpeedChanged(u32),
    FullscreenRequested(bool),
    PanelOpened,
    /// The panel closed; in-flight revision results are now stale.
    PanelClosed,
    /// The engine went idle; the panel (if open) closed too.
    SessionReset,
}

/// Transport controller state.
#[derive(Debug, Default)]
pub struct Transport {
    panel_open: bool,
    is_fullscreen: bool,
}

impl Transport {
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Mirror a display-mode change notification.
    pub fn on_fullscreen_changed(&mut self, fullscreen: bool) {
        if self.is_fullscreen != fullscreen {
            debug!(fullscreen, "display mode changed");
            self.is_fullscreen = fullscreen;
        }
    }

    /// Map a key press to an intent.
    ///
    /// While the panel is open only Esc (close panel) resolves. While the
    /// content-entry field is focused and nothing is loaded, nothing resolves
    /// so typing is never intercepted.
    pub fn resolve_key(
        &self,
        key: TransportKey,
        ctx: KeyContext,
        engine: &PlaybackEngine,
    ) -> Option<Intent> {
        if ctx.command_modifier {
            return None;
        }
        if self.panel_open {
            return (key == TransportKey::Escape).then_some(Intent::ClosePanel);
        }
        if ctx.input_focused && !engine.has_session() {
            return None;
        }
        let intent = match key {
            TransportKey::Space => Intent::TogglePlay,
            TransportKey::ArrowRight => Intent::SkipForward,
            TransportKey::ArrowLeft => Intent::SkipBack,
            TransportKey::ArrowUp => Intent::SpeedUp,
            TransportKey::ArrowDown => Intent::SpeedDown,
            TransportKey::F => Intent::ToggleFullscreen,
            TransportKey::R => Intent::Reset,
            TransportKey::Escape if self.is_fullscreen => Intent::ExitFullscreen,
            TransportKey::Escape => Intent::Reset,
        };
        Some(intent)
    }

    /// Apply `intent` to the engine and display.
    pub fn dispatch(
        &mut self,
        intent: Intent,
        engine: &mut PlaybackEngine,
        display: &mut dyn DisplayMode,
        now: Instant,
    ) -> TransportEffect {
        debug!(?intent, "transport dispatch");
        match intent {
            Intent::TogglePlay => {
                if engine.toggle_play(now) {
                    TransportEffect::PlaybackToggled
                } else {
                    TransportEffect::Ignored
                }
            }
            Intent::SkipForward | Intent::SkipBack => {
                if !engine.has_session() {
                    return TransportEffect::Ignored;
                }
                let delta = if intent == Intent::SkipForward {
                    SKIP_TOKENS
                } else {
                    -SKIP_TOKENS
                };
                engine.jump(delta);
                TransportEffect::Moved
            }
            Intent::SpeedUp => TransportEffect::SpeedChanged(engine.adjust_speed(WPM_STEP, now)),
            Intent::SpeedDown => {
                TransportEffect::SpeedChanged(engine.adjust_speed(-WPM_STEP, now))
            }
            Intent::ToggleFullscreen => {
                let target = !self.is_fullscreen;
                if target {
                    display.enter_fullscreen();
                } else {
                    display.exit_fullscreen();
                }
                TransportEffect::FullscreenRequested(target)
            }
            Intent::ExitFullscreen => {
                if !self.is_fullscreen {
                    return TransportEffect::Ignored;
                }
                display.exit_fullscreen();
                TransportEffect::FullscreenRequested(false)
            }
            Intent::Reset => {
                if engine.state() == PlaybackState::Idle && !self.panel_open {
                    return TransportEffect::Ignored;
                }
                self.panel_open = false;
                engine.reset();
                TransportEffect::SessionReset
            }
            Intent::OpenPanel => {
                if !engine.has_session() {
                    return TransportEffect::Ignored;
                }
                engine.pause();
                self.panel_open = true;
                TransportEffect::PanelOpened
            }
            Intent::ClosePanel => {
                if !self.panel_open {
                    return TransportEffect::Ignored;
                }
                self.panel_open = false;
                TransportEffect::PanelClosed
            }
        }
    }
}
