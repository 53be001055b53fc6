use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{TriviaClient, endpoint_url};
use crate::state::{ApiRequest, ApiResponse};

/// What: Spawn the background worker that performs API requests.
///
/// Inputs:
/// - `client`: HTTP client shared by all requests.
/// - `req_rx`: Requests from the main loop.
/// - `res_tx`: Responses back to the main loop.
///
/// Details:
/// - Each request runs in its own task, so a slow request does not hold up
///   later ones; ordering of responses is therefore not guaranteed and the main
///   loop correlates them by id.
/// - No retries: a failure is reported once and the caller decides.
pub fn spawn_api_worker(
    client: TriviaClient,
    mut req_rx: mpsc::UnboundedReceiver<ApiRequest>,
    res_tx: mpsc::UnboundedSender<ApiResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let client = client.clone();
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let started = Instant::now();
                let url = endpoint_url(client.base_url(), &req.call);
                let result = client
                    .execute(&req.call)
                    .await
                    .map_err(|e| e.to_string());
                match &result {
                    Ok(_) => tracing::info!(
                        id = req.id,
                        url = %url,
                        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                        "request completed"
                    ),
                    Err(e) => tracing::warn!(
                        id = req.id,
                        url = %url,
                        error = %e,
                        "request failed"
                    ),
                }
                let _ = tx.send(ApiResponse {
                    id: req.id,
                    call: req.call,
                    result,
                });
            });
        }
        tracing::debug!("api worker stopped");
    });
}

/// What: Spawn the thread that forwards terminal input events.
///
/// Details:
/// - Polls with a short timeout so the cancellation flag is honored promptly.
/// - Exits when the flag is set or the receiving side is gone.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "transient input read error"),
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
