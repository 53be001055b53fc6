use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::view::{
    activate_selected_category, move_category_selection, move_question_selection, request_delete,
    toggle_answer,
};
use crate::state::{ApiRequest, AppState};

/// Keys for the category pane: move with `j`/`k`/arrows, Enter selects.
pub(super) fn handle_categories_key(
    ke: KeyEvent,
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) {
    match ke.code {
        KeyCode::Down | KeyCode::Char('j') => move_category_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_category_selection(app, -1),
        KeyCode::Home | KeyCode::Char('g') => move_category_selection(app, isize::MIN),
        KeyCode::End | KeyCode::Char('G') => move_category_selection(app, isize::MAX),
        KeyCode::Enter | KeyCode::Char(' ') => {
            activate_selected_category(app, api_tx);
        }
        _ => {}
    }
}

/// What: Keys for the question list.
///
/// Details:
/// - `j`/`k`/arrows move, Enter or Space toggles the answer.
/// - `d` or Delete asks to delete the selected question.
pub(super) fn handle_questions_key(
    ke: KeyEvent,
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) {
    match ke.code {
        KeyCode::Down | KeyCode::Char('j') => move_question_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_question_selection(app, -1),
        KeyCode::Home | KeyCode::Char('g') => move_question_selection(app, isize::MIN),
        KeyCode::End | KeyCode::Char('G') => move_question_selection(app, isize::MAX),
        KeyCode::Enter | KeyCode::Char(' ') => toggle_answer(app),
        KeyCode::Delete | KeyCode::Char('d') => {
            if let Some(id) = app.selected().map(|q| q.id) {
                request_delete(app, api_tx, id);
            }
        }
        _ => {}
    }
}
