//! Application error types for the reading core.
use crate::revision::RevisionKind;
use thiserror::Error;

/// Top-level error type for fallible reader operations.
///
/// Index and speed mutations never fail (they clamp); only content
/// submission and revision requests can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("No readable text found.")]
    EmptyContent,

    #[error("Failed to {}: {message}", .kind.verb())]
    RevisionFailed { kind: RevisionKind, message: String },
}

impl ReaderError {
    /// Build a [`ReaderError::RevisionFailed`] for `kind`.
    pub fn revision(kind: RevisionKind, message: impl Into<String>) -> Self {
        Self::RevisionFailed {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ReaderError::EmptyContent.to_string(),
            "No readable text found."
        );
        assert_eq!(
            ReaderError::revision(RevisionKind::Summarize, "timeout").to_string(),
            "Failed to summarize: timeout"
        );
    }
}
