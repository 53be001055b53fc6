use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Position;
use tokio::sync::mpsc;

use crate::logic::view::{load_page, move_question_selection, return_to_list, select_category};
use crate::state::{ApiRequest, AppState, Focus};

/// What: Handle mouse input using the hit-boxes recorded during the last render.
///
/// Details:
/// - Ignored while a modal is open.
/// - Left click on a page indicator loads that page; on a category entry selects
///   it (or returns to the plain list); on a question row selects the row.
/// - Scrolling moves the question selection.
pub(super) fn handle_mouse_event(
    me: MouseEvent,
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) {
    if app.modal.is_open() {
        return;
    }
    let pos = Position::new(me.column, me.row);
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(page) = app
                .page_rects
                .iter()
                .find(|(_, r)| r.contains(pos))
                .map(|(n, _)| *n)
            {
                load_page(app, api_tx, page);
                return;
            }
            if let Some(entry) = app
                .category_rects
                .iter()
                .find(|(_, r)| r.contains(pos))
                .map(|(c, _)| *c)
            {
                app.focus = Focus::Categories;
                match entry {
                    Some(id) => {
                        select_category(app, api_tx, id);
                    }
                    None => {
                        return_to_list(app, api_tx);
                    }
                }
                return;
            }
            if let Some(idx) = app
                .question_rects
                .iter()
                .find(|(_, r)| r.contains(pos))
                .map(|(i, _)| *i)
            {
                app.focus = Focus::Questions;
                app.selected_question = idx;
                app.clamp_question_selection();
            }
        }
        MouseEventKind::ScrollDown => move_question_selection(app, 1),
        MouseEventKind::ScrollUp => move_question_selection(app, -1),
        _ => {}
    }
}
