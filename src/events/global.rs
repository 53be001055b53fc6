use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::view::{next_page, prev_page, reload, return_to_list};
use crate::state::{ApiRequest, AppState, Focus};

/// Ctrl+C, honored everywhere.
pub(super) fn is_interrupt(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL) && matches!(ke.code, KeyCode::Char('c' | 'C'))
}

/// Cycle focus Categories → Questions → Search → Categories.
pub(super) fn cycle_focus(app: &mut AppState, forward: bool) {
    app.focus = match (app.focus, forward) {
        (Focus::Categories, true) | (Focus::Search, false) => Focus::Questions,
        (Focus::Questions, true) | (Focus::Categories, false) => Focus::Search,
        (Focus::Search, true) | (Focus::Questions, false) => Focus::Categories,
    };
}

/// What: Handle keys that work the same in the category and question panes.
///
/// Output:
/// - `Some(true)` to quit, `Some(false)` when the key was consumed, `None` to
///   let the focused pane handle it.
pub(super) fn handle_global_key(
    ke: KeyEvent,
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) -> Option<bool> {
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(true),
        KeyCode::Tab => {
            cycle_focus(app, true);
            Some(false)
        }
        KeyCode::BackTab => {
            cycle_focus(app, false);
            Some(false)
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            Some(false)
        }
        KeyCode::Char('r') => {
            reload(app, api_tx);
            Some(false)
        }
        KeyCode::Char('a') => {
            return_to_list(app, api_tx);
            Some(false)
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char(']' | 'n') => {
            next_page(app, api_tx);
            Some(false)
        }
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('[' | 'p') => {
            prev_page(app, api_tx);
            Some(false)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApiCall;

    #[test]
    /// What: Tab and Shift+Tab walk focus in opposite directions.
    fn focus_cycles_both_ways() {
        let mut app = AppState::default();
        assert_eq!(app.focus, Focus::Questions);
        cycle_focus(&mut app, true);
        assert_eq!(app.focus, Focus::Search);
        cycle_focus(&mut app, true);
        assert_eq!(app.focus, Focus::Categories);
        cycle_focus(&mut app, false);
        assert_eq!(app.focus, Focus::Search);
        cycle_focus(&mut app, false);
        assert_eq!(app.focus, Focus::Questions);
    }

    #[test]
    /// What: Right arrow pages forward and `r` reloads the current page.
    fn paging_and_reload_keys() {
        let mut app = AppState::default();
        app.total_questions = 30;
        let (tx, mut rx) = mpsc::unbounded_channel();

        let consumed =
            handle_global_key(KeyEvent::new(KeyCode::Right, KeyModifiers::empty()), &mut app, &tx);
        assert_eq!(consumed, Some(false));
        assert_eq!(
            rx.try_recv().expect("next page").call,
            ApiCall::ListQuestions { page: 2 }
        );

        handle_global_key(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty()),
            &mut app,
            &tx,
        );
        assert_eq!(
            rx.try_recv().expect("reload").call,
            ApiCall::ListQuestions { page: 1 }
        );
    }

    #[test]
    /// What: Pane-specific keys fall through.
    fn unknown_keys_fall_through() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(
            handle_global_key(
                KeyEvent::new(KeyCode::Char('j'), KeyModifiers::empty()),
                &mut app,
                &tx
            ),
            None
        );
    }
}
