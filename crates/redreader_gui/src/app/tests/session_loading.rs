//! Submission, clean-on-submit loading and reset behavior.

use super::*;

#[test]
fn submit_without_clean_pass_loads_immediately() {
    let mut harness = make_app();
    harness.app.input_text = "Hello   world".to_string();
    harness.app.submit_input();

    assert_eq!(harness.app.engine.state(), PlaybackState::Paused);
    assert_eq!(harness.app.engine.tokens(), ["Hello", "world"]);
    assert!(harness.app.input_error.is_none());
    assert!(harness.cmd_rx.try_recv().is_err());
}

#[test]
fn blank_submission_reports_error_and_stays_idle() {
    let mut harness = make_app();
    harness.app.input_text = "  \n\t ".to_string();
    harness.app.submit_input();

    assert_eq!(harness.app.engine.state(), PlaybackState::Idle);
    assert_eq!(
        harness.app.input_error.as_deref(),
        Some("No readable text found.")
    );
    assert!(harness.cmd_rx.try_recv().is_err());
}

#[test]
fn reset_keys_keep_entry_error_while_idle() {
    let mut harness = make_app();
    let ctx = egui::Context::default();
    harness.app.input_text = "   ".to_string();
    harness.app.submit_input();

    press(
        &mut harness.app,
        &ctx,
        &[egui::Key::Escape, egui::Key::R],
        Instant::now(),
    );
    assert_eq!(harness.app.engine.state(), PlaybackState::Idle);
    assert_eq!(
        harness.app.input_error.as_deref(),
        Some("No readable text found.")
    );
}

#[test]
fn clean_on_submit_loads_cleaned_text() {
    let mut harness = make_app_with(Config {
        clean_on_submit: true,
        ..Config::default()
    });
    harness.app.input_text = "raw ## text".to_string();
    harness.app.submit_input();
    assert_eq!(harness.app.engine.state(), PlaybackState::Loading);
    assert_eq!(
        harness.app.repaint_after(Instant::now()),
        Some(BACKEND_POLL_INTERVAL)
    );

    let ticket = match recv_cmd(&harness.cmd_rx) {
        CoreCmd::Clean { ticket, raw } => {
            assert_eq!(raw, "raw ## text");
            ticket
        }
        other => panic!("unexpected command: {:?}", other),
    };
    harness
        .evt_tx
        .send(CoreEvent::Cleaned {
            ticket,
            raw: "raw ## text".to_string(),
            text: "raw text".to_string(),
        })
        .expect("send cleaned");
    harness.app.poll_backend();

    assert_eq!(harness.app.engine.state(), PlaybackState::Paused);
    assert_eq!(harness.app.engine.tokens(), ["raw", "text"]);
    assert_eq!(harness.app.engine.original_text(), Some("raw ## text"));
    assert_eq!(harness.app.repaint_after(Instant::now()), None);
}

#[test]
fn clean_result_after_reset_is_dropped() {
    let mut harness = make_app_with(Config {
        clean_on_submit: true,
        ..Config::default()
    });
    harness.app.input_text = "first text".to_string();
    harness.app.submit_input();
    let ticket = recv_cmd(&harness.cmd_rx).ticket();

    harness.app.dispatch(Intent::Reset, Instant::now());
    harness
        .evt_tx
        .send(CoreEvent::Cleaned {
            ticket,
            raw: "first text".to_string(),
            text: "first text".to_string(),
        })
        .expect("send cleaned");
    harness.app.poll_backend();

    assert_eq!(harness.app.engine.state(), PlaybackState::Idle);
    assert!(!harness.app.engine.has_session());
}

#[test]
fn older_clean_result_cannot_load_over_newer_submission() {
    let mut harness = make_app_with(Config {
        clean_on_submit: true,
        ..Config::default()
    });
    harness.app.input_text = "first".to_string();
    harness.app.submit_input();
    let first = recv_cmd(&harness.cmd_rx).ticket();
    harness.app.input_text = "second".to_string();
    harness.app.submit_input();
    let second = recv_cmd(&harness.cmd_rx).ticket();

    for (ticket, text) in [(first, "first"), (second, "second")] {
        harness
            .evt_tx
            .send(CoreEvent::Cleaned {
                ticket,
                raw: text.to_string(),
                text: text.to_string(),
            })
            .expect("send cleaned");
    }
    harness.app.poll_backend();
    assert_eq!(harness.app.engine.tokens(), ["second"]);
}

#[test]
fn lost_worker_falls_back_to_raw_text() {
    let mut harness = make_app_with(Config {
        clean_on_submit: true,
        ..Config::default()
    });
    drop(harness.cmd_rx);
    harness.app.input_text = "still readable".to_string();
    harness.app.submit_input();

    assert_eq!(harness.app.engine.state(), PlaybackState::Paused);
    assert_eq!(harness.app.engine.tokens(), ["still", "readable"]);
}

#[test]
fn frames_render_for_entry_and_reading_views() {
    let ctx = egui::Context::default();
    let now = Instant::now();
    let mut harness = make_app();
    render_frame(&mut harness.app, &ctx, now);
    assert!(!harness.app.input_focused);

    harness.app.input_text = "a few words to read".to_string();
    harness.app.submit_input();
    harness.app.engine.toggle_play(now);
    render_frame(&mut harness.app, &ctx, now);
    harness.app.dispatch(Intent::OpenPanel, now);
    render_frame(&mut harness.app, &ctx, now);
    assert!(harness.app.transport.panel_open());
}

#[test]
fn reading_schedules_repaint_for_next_tick() {
    let now = Instant::now();
    let mut harness = make_reading_app(5);
    assert_eq!(harness.app.repaint_after(now), None);
    harness.app.engine.toggle_play(now);
    assert_eq!(
        harness.app.repaint_after(now),
        Some(Duration::from_millis(200))
    );
}
