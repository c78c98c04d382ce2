//! Protocol types for the revision backend worker.

use redreader_core::revision::RevisionTicket;
use redreader_core::{ReaderError, RevisionKind};

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Summarize or simplify session text for the revision panel.
    Revise {
        ticket: RevisionTicket,
        kind: RevisionKind,
        text: String,
    },
    /// Clean freshly submitted text before it is tokenized.
    Clean { ticket: RevisionTicket, raw: String },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum CoreEvent {
    /// A revision finished, successfully or not.
    Revised {
        ticket: RevisionTicket,
        kind: RevisionKind,
        result: Result<String, ReaderError>,
    },
    /// Submitted text is ready to load; `text` is `raw` when cleaning failed.
    Cleaned {
        ticket: RevisionTicket,
        raw: String,
        text: String,
    },
}

impl CoreCmd {
    pub fn ticket(&self) -> RevisionTicket {
        match self {
            Self::Revise { ticket, .. } | Self::Clean { ticket, .. } => *ticket,
        }
    }
}
