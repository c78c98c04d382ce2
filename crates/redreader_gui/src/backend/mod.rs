//! Backend worker wiring for the reader window.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the egui UI thread.

mod protocol;
mod worker;

pub use protocol::{CoreCmd, CoreEvent};
pub use worker::{spawn_backend, BackendHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use redreader_core::revision::RevisionTracker;
    use redreader_core::{ReaderError, RevisionGateway, RevisionKind};
    use std::sync::Arc;
    use std::time::Duration;

    /// Echoes a tagged copy of the input; fails for text containing "fail".
    struct EchoGateway;

    impl RevisionGateway for EchoGateway {
        fn revise(&self, kind: RevisionKind, text: &str) -> Result<String, ReaderError> {
            if text.contains("fail") {
                return Err(ReaderError::revision(kind, "service offline"));
            }
            Ok(format!("{}:{}", kind.verb(), text))
        }
    }

    fn recv_event(rx: &crossbeam_channel::Receiver<CoreEvent>) -> CoreEvent {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("expected backend event")
    }

    #[test]
    fn backend_revises_text_with_ticket() {
        let backend = spawn_backend(Arc::new(EchoGateway)).expect("spawn");
        let mut tracker = RevisionTracker::default();
        let ticket = tracker.issue(RevisionKind::Simplify);
        backend
            .cmd_tx
            .send(CoreCmd::Revise {
                ticket,
                kind: RevisionKind::Simplify,
                text: "hard words".to_string(),
            })
            .expect("send revise");

        match recv_event(&backend.evt_rx) {
            CoreEvent::Revised {
                ticket: got,
                kind,
                result,
            } => {
                assert_eq!(got, ticket);
                assert_eq!(kind, RevisionKind::Simplify);
                assert_eq!(result.as_deref(), Ok("simplify:hard words"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn backend_reports_revision_failure() {
        let backend = spawn_backend(Arc::new(EchoGateway)).expect("spawn");
        let mut tracker = RevisionTracker::default();
        backend
            .cmd_tx
            .send(CoreCmd::Revise {
                ticket: tracker.issue(RevisionKind::Summarize),
                kind: RevisionKind::Summarize,
                text: "please fail".to_string(),
            })
            .expect("send revise");

        match recv_event(&backend.evt_rx) {
            CoreEvent::Revised { result, .. } => {
                assert_eq!(
                    result,
                    Err(ReaderError::revision(
                        RevisionKind::Summarize,
                        "service offline"
                    ))
                );
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn backend_clean_keeps_raw_text_on_failure() {
        let backend = spawn_backend(Arc::new(EchoGateway)).expect("spawn");
        let mut tracker = RevisionTracker::default();

        for raw in ["tidy me", "fail me"] {
            backend
                .cmd_tx
                .send(CoreCmd::Clean {
                    ticket: tracker.issue(RevisionKind::Clean),
                    raw: raw.to_string(),
                })
                .expect("send clean");
        }

        match recv_event(&backend.evt_rx) {
            CoreEvent::Cleaned { raw, text, .. } => {
                assert_eq!(raw, "tidy me");
                assert_eq!(text, "clean text:tidy me");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        match recv_event(&backend.evt_rx) {
            CoreEvent::Cleaned { raw, text, .. } => {
                assert_eq!(raw, "fail me");
                assert_eq!(text, "fail me");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
