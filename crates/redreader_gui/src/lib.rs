//! Native RedReader window.
//!
//! Exposes a `run` helper so the workspace root can launch the reader
//! without duplicating initialization logic.

mod app;
/// Backend worker + protocol types used by the GUI and its tests.
pub mod backend;

use app::RedReaderApp;
use eframe::egui;
use redreader_core::Config;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "redreader=warn,redreader_core=info,redreader_gui=info";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed by an embedding host.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the reader window with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including a
/// failure to spawn the backend worker thread.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let app =
        RedReaderApp::new(&config).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("RedReader"),
        ..Default::default()
    };

    eframe::run_native("RedReader", options, Box::new(|_cc| Ok(Box::new(app))))
}
