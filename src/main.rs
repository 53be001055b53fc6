//! trivia-browser binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use trivia_browser::{app, args, config};

/// Log timestamp formatter (`YYYY-MM-DD-T HH:MM:SS`, local time).
struct TriviaTimer;

impl tracing_subscriber::fmt::time::FormatTime for TriviaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer flushing for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Fallback filter when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `<config>/logs/trivia-browser.log` through a non-blocking writer;
///   falls back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = config::logs_dir().join("trivia-browser.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(TriviaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked on the log file
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(TriviaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let mut settings = config::settings();
    cli.apply_overrides(&mut settings);
    let start = cli.start_view();

    if cli.print {
        let code = args::handle_print(&settings, &start).await;
        tracing::info!(code, "print mode finished");
        std::process::exit(code);
    }

    tracing::info!(base_url = %settings.api_base_url, ?start, "trivia-browser starting");
    if let Err(err) = app::run(settings, start).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("trivia-browser: {err}");
    }
    tracing::info!("trivia-browser exited");
}
