//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WPM,
    MAX_WPM, MIN_WPM,
};
use std::env;
use std::time::Duration;

/// Runtime configuration for RedReader.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key; `None` leaves the revision gateway unavailable.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub initial_wpm: u32,
    pub request_timeout_secs: u64,
    /// Run the clean pass over submitted text before tokenizing.
    pub clean_on_submit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            initial_wpm: DEFAULT_WPM,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            clean_on_submit: false,
        }
    }
}

/// Every environment variable [`Config::from_env`] reads.
pub const CONFIG_ENV_VARS: [&str; 7] = [
    "GEMINI_API_KEY",
    "API_KEY",
    "REDREADER_MODEL",
    "REDREADER_API_BASE",
    "REDREADER_WPM",
    "REDREADER_REQUEST_TIMEOUT_SECS",
    "REDREADER_CLEAN_ON_SUBMIT",
];

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn env_nonempty(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env_nonempty("GEMINI_API_KEY").or_else(|| env_nonempty("API_KEY")),
            model: env_nonempty("REDREADER_MODEL").unwrap_or(defaults.model),
            api_base: env_nonempty("REDREADER_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            initial_wpm: env::var("REDREADER_WPM")
                .ok()
                .and_then(|w| w.trim().parse::<u32>().ok())
                .map(|w| w.clamp(MIN_WPM, MAX_WPM))
                .unwrap_or(defaults.initial_wpm),
            request_timeout_secs: env::var("REDREADER_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.request_timeout_secs),
            clean_on_submit: env_flag_enabled("REDREADER_CLEAN_ON_SUBMIT"),
        }
    }

    /// HTTP timeout applied to gateway requests.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
