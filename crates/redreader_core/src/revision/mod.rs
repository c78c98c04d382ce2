//! Text revision gateway contract.
//!
//! Revisions are opaque text-to-text rewrites served by an external model.
//! Calls block, so hosts run them off the UI thread and route results back
//! through a [`RevisionTracker`] to drop answers nobody is waiting for.

mod gemini;

pub use gemini::GeminiGateway;

use crate::config::Config;
use crate::constants::{CLEAN_INPUT_CHAR_LIMIT, REVISION_INPUT_CHAR_LIMIT};
use crate::error::ReaderError;
use std::sync::Arc;
use tracing::warn;

/// The rewrites a gateway offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisionKind {
    /// Key points of the text; display-only.
    Summarize,
    /// Simpler rewording; may replace the reading text.
    Simplify,
    /// Formatting cleanup before a session starts.
    Clean,
}

impl RevisionKind {
    /// Verb used in user-facing messages.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Simplify => "simplify",
            Self::Clean => "clean text",
        }
    }

    /// Maximum characters of input sent for this kind.
    pub fn input_limit(self) -> usize {
        match self {
            Self::Clean => CLEAN_INPUT_CHAR_LIMIT,
            Self::Summarize | Self::Simplify => REVISION_INPUT_CHAR_LIMIT,
        }
    }

    /// Instruction placed ahead of the source text.
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Summarize => {
                "Summarize the following text into 3-5 concise bullet points. Return plain text only."
            }
            Self::Simplify => {
                "Rewrite the following text to be simpler, clearer, and optimized for speed reading. \
                 Maintain the original meaning but use simpler vocabulary and shorter sentences. \
                 Do not use markdown."
            }
            Self::Clean => {
                "Clean the following text for a speed reading application. Remove weird formatting, \
                 excessive whitespace, and non-content artifacts. Return only the clean text."
            }
        }
    }

    /// Text used when the model answers with nothing.
    pub fn empty_reply_fallback(self, input: &str) -> String {
        match self {
            Self::Summarize => "Could not summarize.".to_string(),
            Self::Simplify | Self::Clean => input.to_string(),
        }
    }
}

/// A blocking text-to-text rewriting service.
pub trait RevisionGateway: Send + Sync {
    /// Rewrite `text` as `kind` asks.
    ///
    /// # Errors
    /// [`ReaderError::RevisionFailed`] on network, auth or service failure.
    fn revise(&self, kind: RevisionKind, text: &str) -> Result<String, ReaderError>;

    fn summarize(&self, text: &str) -> Result<String, ReaderError> {
        self.revise(RevisionKind::Summarize, text)
    }

    fn simplify(&self, text: &str) -> Result<String, ReaderError> {
        self.revise(RevisionKind::Simplify, text)
    }

    /// Clean `text`, falling back to the input when the service fails.
    fn clean(&self, text: &str) -> String {
        match self.revise(RevisionKind::Clean, text) {
            Ok(cleaned) if !cleaned.trim().is_empty() => cleaned,
            Ok(_) => text.to_string(),
            Err(err) => {
                warn!("clean text failed, using raw input: {}", err);
                text.to_string()
            }
        }
    }
}

/// Gateway used when no API key is configured; every call fails.
#[derive(Debug, Clone)]
pub struct UnavailableGateway {
    reason: String,
}

impl UnavailableGateway {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl RevisionGateway for UnavailableGateway {
    fn revise(&self, kind: RevisionKind, _text: &str) -> Result<String, ReaderError> {
        Err(ReaderError::revision(kind, self.reason.clone()))
    }
}

/// Build the gateway described by `config`.
///
/// # Returns
/// A [`GeminiGateway`] when an API key is set and the HTTP client builds;
/// otherwise an [`UnavailableGateway`] explaining why.
pub fn gateway_from_config(config: &Config) -> Arc<dyn RevisionGateway> {
    let Some(api_key) = config.api_key.clone() else {
        warn!("no Gemini API key configured; AI tools are unavailable");
        return Arc::new(UnavailableGateway::new(
            "API key not found in environment variables",
        ));
    };
    match GeminiGateway::new(api_key, config) {
        Ok(gateway) => Arc::new(gateway),
        Err(err) => {
            warn!("failed to build Gemini client: {}", err);
            Arc::new(UnavailableGateway::new(err.to_string()))
        }
    }
}

/// Identifier of one issued revision request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevisionTicket(u64);

impl RevisionTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Tracks the single revision request the UI is waiting on.
///
/// Issuing a new ticket or cancelling makes every earlier ticket stale.
#[derive(Debug, Default)]
pub struct RevisionTracker {
    next_id: u64,
    pending: Option<(RevisionTicket, RevisionKind)>,
}

impl RevisionTracker {
    /// Start waiting on a new request of `kind`.
    pub fn issue(&mut self, kind: RevisionKind) -> RevisionTicket {
        self.next_id = self.next_id.wrapping_add(1);
        let ticket = RevisionTicket(self.next_id);
        self.pending = Some((ticket, kind));
        ticket
    }

    /// Kind of the request currently awaited.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> Option<RevisionKind> {
        self.pending.map(|(_, kind)| kind)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept a finished request.
    ///
    /// # Returns
    /// `true` when `ticket` is the one awaited; it is then no longer pending.
    pub fn accept(&mut self, ticket: RevisionTicket) -> bool {
        match self.pending {
            Some((awaited, _)) if awaited == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Stop waiting; any in-flight result will be rejected.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
