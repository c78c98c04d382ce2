//! Background worker thread for blocking revision gateway calls.

use crate::backend::{CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use redreader_core::RevisionGateway;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    /// Wrap externally owned channels; the caller plays the worker.
    pub fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

fn handle_command(gateway: &dyn RevisionGateway, cmd: CoreCmd) -> CoreEvent {
    let started = Instant::now();
    let event = match cmd {
        CoreCmd::Revise { ticket, kind, text } => {
            let result = gateway.revise(kind, &text);
            if let Err(err) = &result {
                warn!(ticket = ticket.id(), "revision failed: {}", err);
            }
            CoreEvent::Revised {
                ticket,
                kind,
                result,
            }
        }
        CoreCmd::Clean { ticket, raw } => {
            let text = gateway.clean(&raw);
            CoreEvent::Cleaned { ticket, raw, text }
        }
    };
    debug!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "backend command finished"
    );
    event
}

/// Spawn the backend worker thread that runs gateway calls.
///
/// All network I/O stays off the UI thread; the worker replies with
/// [`CoreEvent`] values that are polled each frame. The worker exits once
/// every command sender is dropped.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Errors
/// Returns the I/O error when the worker thread cannot be spawned.
pub fn spawn_backend(gateway: Arc<dyn RevisionGateway>) -> io::Result<BackendHandle> {
    let (cmd_tx, cmd_rx) = unbounded::<CoreCmd>();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("redreader-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                let ticket = cmd.ticket();
                let event = handle_command(gateway.as_ref(), cmd);
                if evt_tx.send(event).is_err() {
                    debug!(ticket = ticket.id(), "ui gone; dropping backend event");
                    break;
                }
            }
            info!("backend worker stopped");
        })?;

    Ok(BackendHandle { cmd_tx, evt_rx })
}
