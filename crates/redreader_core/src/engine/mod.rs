//! RSVP playback engine.
//!
//! The engine owns the reading session, the play state and the one tick
//! timer. Callers drive time explicitly: every operation that can start or
//! reschedule playback takes `now`, and [`PlaybackEngine::tick`] is polled by
//! the host loop. Leaving [`PlaybackState::Reading`] always cancels the timer.

mod timer;

pub use timer::{interval_for_wpm, TickTimer};

use crate::constants::{DEFAULT_SESSION_TITLE, DEFAULT_WPM, MAX_WPM, MIN_WPM};
use crate::error::ReaderError;
use crate::text::tokenize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Playback state; exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading,
    Reading,
    Paused,
}

/// Result of a [`PlaybackEngine::tick`] poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not reading; nothing scheduled.
    Inactive,
    /// Reading, but the next tick is not due yet.
    Waiting,
    /// Moved to the next token.
    Advanced,
    /// Hit the last token and paused.
    Finished,
}

/// Result of completing a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A new session is ready and paused at its first token.
    Loaded,
    /// The engine was no longer loading (reset mid-load); input ignored.
    Discarded,
}

/// One loaded text: immutable tokens plus the reading position.
#[derive(Debug, Clone)]
struct Session {
    tokens: Vec<String>,
    current_index: usize,
    title: String,
    original_text: String,
}

impl Session {
    fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }

    fn set_index(&mut self, index: i64) {
        self.current_index = index.clamp(0, self.last_index() as i64) as usize;
    }
}

/// Owned RSVP engine instance.
#[derive(Debug)]
pub struct PlaybackEngine {
    state: PlaybackState,
    session: Option<Session>,
    wpm: u32,
    timer: TickTimer,
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WPM)
    }
}

impl PlaybackEngine {
    /// Create an idle engine at `wpm` (clamped to the valid range).
    pub fn new(wpm: u32) -> Self {
        Self {
            state: PlaybackState::Idle,
            session: None,
            wpm: clamp_wpm(wpm),
            timer: TickTimer::default(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_reading(&self) -> bool {
        self.state == PlaybackState::Reading
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    /// Start loading new content, replacing any current session.
    pub fn begin_load(&mut self) {
        if self.session.is_some() {
            self.reset();
        }
        self.timer.cancel();
        self.state = PlaybackState::Loading;
        debug!("playback engine loading");
    }

    /// Finish a load started with [`Self::begin_load`].
    ///
    /// `original` is kept as the session's source text; `text` is what gets
    /// tokenized (they differ when a clean pass rewrote the input).
    ///
    /// # Returns
    /// [`LoadOutcome::Loaded`] with the engine paused at token 0, or
    /// [`LoadOutcome::Discarded`] when the engine is not loading anymore.
    ///
    /// # Errors
    /// [`ReaderError::EmptyContent`] when `text` holds no tokens; the engine
    /// returns to [`PlaybackState::Idle`].
    pub fn complete_load(
        &mut self,
        original: impl Into<String>,
        text: &str,
    ) -> Result<LoadOutcome, ReaderError> {
        if self.state != PlaybackState::Loading {
            debug!(state = ?self.state, "discarding load result outside loading state");
            return Ok(LoadOutcome::Discarded);
        }
        let tokens = tokenize(text);
        if tokens.is_empty() {
            self.state = PlaybackState::Idle;
            return Err(ReaderError::EmptyContent);
        }
        info!(tokens = tokens.len(), "reading session loaded");
        self.session = Some(Session {
            tokens,
            current_index: 0,
            title: DEFAULT_SESSION_TITLE.to_string(),
            original_text: original.into(),
        });
        self.state = PlaybackState::Paused;
        Ok(LoadOutcome::Loaded)
    }

    /// Load `raw` as a new session in one step.
    ///
    /// # Errors
    /// [`ReaderError::EmptyContent`] when `raw` holds no tokens.
    pub fn submit(&mut self, raw: &str) -> Result<(), ReaderError> {
        self.begin_load();
        self.complete_load(raw, raw).map(|_| ())
    }

    /// Flip between reading and paused; no-op without a session.
    ///
    /// # Returns
    /// `true` when the state changed.
    pub fn toggle_play(&mut self, now: Instant) -> bool {
        match self.state {
            PlaybackState::Reading => self.pause(),
            PlaybackState::Paused => self.play(now),
            PlaybackState::Idle | PlaybackState::Loading => false,
        }
    }

    /// Start reading from the current token.
    ///
    /// # Returns
    /// `true` when playback started.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        self.state = PlaybackState::Reading;
        self.timer.arm(now, interval_for_wpm(self.wpm));
        debug!(wpm = self.wpm, "playback started");
        true
    }

    /// Pause reading.
    ///
    /// # Returns
    /// `true` when playback was running.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Reading {
            return false;
        }
        self.state = PlaybackState::Paused;
        self.timer.cancel();
        debug!("playback paused");
        true
    }

    /// Drop the session and return to idle from any state.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.session = None;
        self.state = PlaybackState::Idle;
        info!("reading session reset");
    }

    /// Poll the tick timer.
    ///
    /// Advances at most one token per call; at the last token the engine
    /// pauses instead of advancing.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.state != PlaybackState::Reading {
            return TickOutcome::Inactive;
        }
        if !self.timer.poll(now) {
            return TickOutcome::Waiting;
        }
        let Some(session) = self.session.as_mut() else {
            self.timer.cancel();
            self.state = PlaybackState::Idle;
            return TickOutcome::Inactive;
        };
        if session.current_index >= session.last_index() {
            self.state = PlaybackState::Paused;
            self.timer.cancel();
            info!("reached end of text");
            return TickOutcome::Finished;
        }
        session.current_index += 1;
        TickOutcome::Advanced
    }

    /// Time until the next tick is due while reading.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        if self.state == PlaybackState::Reading {
            self.timer.remaining(now)
        } else {
            None
        }
    }

    /// Jump to `percent` (0–100) of the text; the play state is unchanged.
    pub fn seek_to_fraction(&mut self, percent: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let percent = if percent.is_nan() { 0.0 } else { percent };
        let target = (percent / 100.0 * session.tokens.len() as f64).floor();
        let target = target.clamp(0.0, session.last_index() as f64) as i64;
        session.set_index(target);
    }

    /// Move the reading position by `delta` tokens, clamped to the text.
    pub fn jump(&mut self, delta: i64) {
        if let Some(session) = self.session.as_mut() {
            session.set_index((session.current_index as i64).saturating_add(delta));
        }
    }

    /// Rewind to the first token without changing the play state.
    pub fn restart(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.current_index = 0;
        }
    }

    /// Set the speed, clamped to the valid range.
    ///
    /// While reading, the pending tick is replaced by one at the new
    /// interval; the reading position is kept.
    ///
    /// # Returns
    /// The speed now in effect.
    pub fn set_speed(&mut self, wpm: u32, now: Instant) -> u32 {
        let next = clamp_wpm(wpm);
        if next != self.wpm {
            self.wpm = next;
            if self.state == PlaybackState::Reading {
                self.timer.arm(now, interval_for_wpm(next));
            }
            debug!(wpm = next, "speed changed");
        }
        self.wpm
    }

    /// Step the speed by `delta` words per minute.
    pub fn adjust_speed(&mut self, delta: i32, now: Instant) -> u32 {
        let next = (i64::from(self.wpm) + i64::from(delta)).clamp(0, i64::from(MAX_WPM));
        self.set_speed(next as u32, now)
    }

    /// Replace the session text with a revision and rewind to token 0.
    ///
    /// The play state and the original source text are left alone.
    ///
    /// # Returns
    /// `false` when no session is loaded (nothing to revise).
    ///
    /// # Errors
    /// [`ReaderError::EmptyContent`] when `tokens` is empty; the session is
    /// left untouched.
    pub fn apply_revision(
        &mut self,
        tokens: Vec<String>,
        title: impl Into<String>,
    ) -> Result<bool, ReaderError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if tokens.is_empty() {
            return Err(ReaderError::EmptyContent);
        }
        session.tokens = tokens;
        session.title = title.into();
        session.current_index = 0;
        info!(tokens = session.tokens.len(), "revision applied");
        Ok(true)
    }

    /// Token at the reading position.
    pub fn current_token(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.tokens[session.current_index].as_str())
    }

    pub fn current_index(&self) -> usize {
        self.session
            .as_ref()
            .map(|session| session.current_index)
            .unwrap_or(0)
    }

    pub fn token_count(&self) -> usize {
        self.session
            .as_ref()
            .map(|session| session.tokens.len())
            .unwrap_or(0)
    }

    pub fn tokens(&self) -> &[String] {
        self.session
            .as_ref()
            .map(|session| session.tokens.as_slice())
            .unwrap_or(&[])
    }

    pub fn title(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.title.as_str())
    }

    /// Source text the session was created from.
    pub fn original_text(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.original_text.as_str())
    }

    /// Reading position as a percentage of the token count.
    pub fn progress_percent(&self) -> f64 {
        match self.session.as_ref() {
            Some(session) => session.current_index as f64 / session.tokens.len() as f64 * 100.0,
            None => 0.0,
        }
    }

    /// Whole minutes left at the current speed, rounded up.
    pub fn minutes_remaining(&self) -> u64 {
        let left = self.token_count().saturating_sub(self.current_index()) as u64;
        left.div_ceil(u64::from(self.wpm.max(1)))
    }
}

fn clamp_wpm(wpm: u32) -> u32 {
    wpm.clamp(MIN_WPM, MAX_WPM)
}
