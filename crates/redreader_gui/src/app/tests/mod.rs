//! App tests driving the shell through test channels and egui input.

use super::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use redreader_core::PlaybackState;

struct TestHarness {
    app: RedReaderApp,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
}

fn make_app_with(config: Config) -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let backend = BackendHandle::from_test_channels(cmd_tx, evt_rx);
    let app = RedReaderApp::with_backend(backend, &config);
    TestHarness {
        app,
        cmd_rx,
        evt_tx,
    }
}

fn make_app() -> TestHarness {
    make_app_with(Config::default())
}

/// App with a paused session of `count` generated words.
fn make_reading_app(count: usize) -> TestHarness {
    let mut harness = make_app();
    let words: Vec<String> = (0..count).map(|idx| format!("w{}", idx)).collect();
    harness.app.input_text = words.join(" ");
    harness.app.submit_input();
    assert!(harness.app.engine.has_session());
    harness
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.try_recv().expect("expected backend command")
}

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn press_with(
    app: &mut RedReaderApp,
    ctx: &egui::Context,
    modifiers: egui::Modifiers,
    keys: &[egui::Key],
    now: Instant,
) {
    let input = egui::RawInput {
        events: keys.iter().map(|key| key_event(*key, modifiers)).collect(),
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        app.handle_keyboard(ctx, now);
    });
}

fn press(app: &mut RedReaderApp, ctx: &egui::Context, keys: &[egui::Key], now: Instant) {
    press_with(app, ctx, egui::Modifiers::NONE, keys, now);
}

const SCREEN_SIZE: egui::Vec2 = egui::vec2(1200.0, 900.0);

/// Render every surface once with `events` as this frame's input, as `update` would.
fn run_frame(
    app: &mut RedReaderApp,
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    now: Instant,
) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN_SIZE)),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        app.ensure_style(ctx);
        app.render_top_bar(ctx);
        app.render_footer(ctx);
        app.render_main(ctx, now);
        if app.transport.panel_open() {
            app.render_revision_panel(ctx, now);
        }
        app.display.flush(ctx);
    });
}

fn render_frame(app: &mut RedReaderApp, ctx: &egui::Context, now: Instant) {
    run_frame(app, ctx, Vec::new(), now);
}

/// Press and release the primary button at `pos` over two frames.
fn click_at(app: &mut RedReaderApp, ctx: &egui::Context, pos: egui::Pos2, now: Instant) {
    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    };
    run_frame(app, ctx, vec![egui::Event::PointerMoved(pos), button(true)], now);
    run_frame(app, ctx, vec![button(false)], now);
}

mod session_loading;
