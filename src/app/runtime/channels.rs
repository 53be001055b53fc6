use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::TriviaClient;
use crate::state::{ApiRequest, ApiResponse};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Input events flow from the polling thread to the main loop.
/// - API requests flow from the main loop to the API worker; responses flow back.
pub struct Channels {
    /// Sender handed to the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Input events for the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests to the API worker.
    pub api_tx: mpsc::UnboundedSender<ApiRequest>,
    /// Completed requests back from the API worker.
    pub api_res_rx: mpsc::UnboundedReceiver<ApiResponse>,
}

impl Channels {
    /// What: Create all channels and spawn the API worker.
    ///
    /// Inputs:
    /// - `client`: HTTP client handed to the worker.
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    pub fn new(client: TriviaClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (api_tx, api_req_rx) = mpsc::unbounded_channel::<ApiRequest>();
        let (api_res_tx, api_res_rx) = mpsc::unbounded_channel::<ApiResponse>();

        super::workers::spawn_api_worker(client, api_req_rx, api_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            api_tx,
            api_res_rx,
        }
    }
}
