use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::config::Settings;
use crate::sources::TriviaClient;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod handlers;
pub mod init;
mod workers;

use channels::Channels;
use handlers::handle_api_response;
use init::{StartView, send_initial_requests};
use workers::spawn_event_thread;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup and input polling (used by tests).
pub const HEADLESS_ENV: &str = "TRIVIA_TEST_HEADLESS";

/// What: Run the question browser end-to-end: initialize terminal and state,
/// spawn the API worker and input thread, drive the event loop, and restore
/// the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (file values with CLI overrides applied).
/// - `start`: Mode and page the view opens with.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - Event loop: renders a frame, then waits for either an input event or an
///   API response and applies it to the state.
/// - Headless mode (`TRIVIA_TEST_HEADLESS=1`) skips raw mode and rendering.
pub async fn run(settings: Settings, start: StartView) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let client = TriviaClient::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?;
    tracing::info!(base_url = %client.base_url(), headless, "starting question view");

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::with_settings(&settings);
    let mut channels = Channels::new(client);

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    send_initial_requests(&mut app, &channels.api_tx, &start);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &channels.api_tx) {
                    break;
                }
            }
            Some(resp) = channels.api_res_rx.recv() => {
                handle_api_response(&mut app, resp, &channels.api_tx);
            }
            else => break,
        }
    }

    tracing::debug!("[Runtime] Main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
