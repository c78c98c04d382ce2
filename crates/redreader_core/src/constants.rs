//! Shared constants used across RedReader crates.

/// Slowest playback speed accepted by every speed entry point.
pub const MIN_WPM: u32 = 50;
/// Fastest playback speed accepted by every speed entry point.
pub const MAX_WPM: u32 = 2_000;
/// Speed used when nothing else is configured.
pub const DEFAULT_WPM: u32 = 300;
/// Increment applied by the speed up/down controls.
pub const WPM_STEP: i32 = 50;

/// Tokens skipped by the skip-forward/skip-back controls.
pub const SKIP_TOKENS: i64 = 10;

/// Title given to sessions created from pasted text.
pub const DEFAULT_SESSION_TITLE: &str = "Pasted Text";
/// Title given to a session after a simplified revision is applied.
pub const SIMPLIFIED_SESSION_TITLE: &str = "Simplified Content";

/// Characters of source text sent for a clean pass.
pub const CLEAN_INPUT_CHAR_LIMIT: usize = 8_000;
/// Characters of source text sent for summarize/simplify.
pub const REVISION_INPUT_CHAR_LIMIT: usize = 10_000;

/// Default Gemini model used by the revision gateway.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
/// Default Gemini REST base URL (model name and method are appended).
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Default HTTP timeout for revision requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
