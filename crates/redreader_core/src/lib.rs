//! Core domain library for RedReader (tokenizing, ORP layout, playback, revisions).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across RedReader crates.
pub mod constants;
/// Playback engine and its tick timer.
pub mod engine;
/// Scoped environment overrides for configuration tests.
pub mod env;
/// Application error types.
pub mod error;
/// Optimal Recognition Point splitting.
pub mod orp;
/// Text revision gateway contract and implementations.
pub mod revision;
/// Tokenizing and text helpers.
pub mod text;
/// Keyboard/UI intent routing into the playback engine.
pub mod transport;

pub use config::Config;
pub use engine::{LoadOutcome, PlaybackEngine, PlaybackState, TickOutcome};
pub use error::ReaderError;
pub use orp::OrpSplit;
pub use revision::{RevisionGateway, RevisionKind};
pub use transport::{DisplayMode, Intent, Transport, TransportEffect, TransportKey};
