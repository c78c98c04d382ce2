//! RedReader desktop entry point.

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    let exit_code = run_and_report(redreader_gui::run);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_and_report<F, E>(runner: F) -> i32
where
    F: FnOnce() -> Result<(), E>,
    E: std::fmt::Display,
{
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("redreader error: {}", err);
            1
        }
    }
}

fn print_help() {
    println!(
        r#"RedReader - one word at a time speed reader

USAGE:
    redreader [OPTIONS]

OPTIONS:
    -h, --help    Print this help message

ENVIRONMENT:
    GEMINI_API_KEY                  Key for AI tools (falls back to API_KEY)
    REDREADER_MODEL                 Gemini model (default: gemini-2.0-flash-exp)
    REDREADER_API_BASE              Gemini REST base URL
    REDREADER_WPM                   Starting speed, 50-2000 (default: 300)
    REDREADER_REQUEST_TIMEOUT_SECS  AI request timeout (default: 30)
    REDREADER_CLEAN_ON_SUBMIT       Clean pasted text with AI before reading
    RUST_LOG                        Log filter (default: redreader=warn,redreader_core=info,redreader_gui=info)

KEYS:
    Space        Play/pause
    Left/Right   Skip 10 words
    Up/Down      Speed +/- 50 WPM
    F            Toggle fullscreen
    R, Esc       Close the text (Esc leaves fullscreen first)
"#
    );
}
