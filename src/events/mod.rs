//! Event handling layer for the question view.
//!
//! Converts raw `crossterm` events into view operations:
//!
//! - Modals (alert, delete confirmation) capture all input while open
//! - Global keys: quit, focus cycling, paging, reload, search focus
//! - Pane keys: category navigation/selection, question navigation/delete/reveal
//! - Search box: text editing and submit
//! - Mouse: clicks on page indicators, category entries, and question rows
//!
//! All functions here are synchronous; network work is handed to the API
//! worker through the request channel.

use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{ApiRequest, AppState, Focus};

mod global;
mod modals;
mod mouse;
mod panes;
mod search;

/// Dispatch a single input event.
///
/// Returns `true` when the application should exit.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app, api_tx),
        CEvent::Mouse(me) => {
            mouse::handle_mouse_event(*me, app, api_tx);
            false
        }
        _ => false,
    }
}

/// Route a key press by precedence: modal, quit chord, search box, global keys, focused pane.
fn handle_key(ke: KeyEvent, app: &mut AppState, api_tx: &mpsc::UnboundedSender<ApiRequest>) -> bool {
    if global::is_interrupt(&ke) {
        return true;
    }
    if app.modal.is_open() {
        modals::handle_modal_key(ke, app, api_tx);
        return false;
    }
    if app.focus == Focus::Search {
        search::handle_search_key(ke, app, api_tx);
        return false;
    }
    if let Some(quit) = global::handle_global_key(ke, app, api_tx) {
        return quit;
    }
    match app.focus {
        Focus::Categories => panes::handle_categories_key(ke, app, api_tx),
        Focus::Questions => panes::handle_questions_key(ke, app, api_tx),
        Focus::Search => {}
    }
    false
}
