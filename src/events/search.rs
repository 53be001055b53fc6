use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::view::submit_search;
use crate::state::{ApiRequest, AppState, Focus};

/// What: Edit the search box and submit it.
///
/// Details:
/// - Printable characters append; Backspace deletes; Ctrl+U clears.
/// - Enter submits the input exactly as typed and moves focus to the results.
/// - Esc leaves the box without submitting; Tab/Shift+Tab cycle focus.
pub(super) fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) {
    match ke.code {
        KeyCode::Enter => {
            let term = app.search_input.clone();
            submit_search(app, api_tx, &term);
            app.focus = Focus::Questions;
        }
        KeyCode::Esc => app.focus = Focus::Questions,
        KeyCode::Tab => super::global::cycle_focus(app, true),
        KeyCode::BackTab => super::global::cycle_focus(app, false),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.clear();
        }
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.push(ch);
        }
        _ => {}
    }
}
