//! Question view operations: each user intent becomes a state transition plus
//! at most one request to the API worker.

use tokio::sync::mpsc;

use crate::logic::pagination::{clamp_page, page_count};
use crate::state::{ApiCall, ApiRequest, AppState, CategoryId, Modal, QuestionId, ViewMode};

/// What: Hand `call` to the API worker under a fresh request id.
///
/// Output:
/// - The id assigned to the request.
///
/// Details:
/// - Listing calls become the latest wanted fetch: older listing responses are
///   discarded when they arrive.
/// - A closed channel is logged and otherwise ignored; the UI stays responsive.
fn dispatch(app: &mut AppState, api_tx: &mpsc::UnboundedSender<ApiRequest>, call: ApiCall) -> u64 {
    let id = app.next_request_id;
    app.next_request_id += 1;
    if call.page().is_some() {
        app.latest_request_id = id;
        app.loading = true;
    }
    tracing::debug!(id, call = ?call, "dispatching request");
    if api_tx.send(ApiRequest { id, call }).is_err() {
        tracing::warn!(id, "api worker channel closed; request dropped");
    }
    id
}

/// What: Build the listing call for `page` in the current mode.
///
/// Details:
/// - A category mode without a category, or a search mode without a term, falls
///   back to the plain list.
fn listing_call(app: &AppState, page: u32) -> ApiCall {
    match (app.mode, app.current_category, app.search_term.as_ref()) {
        (ViewMode::InCategory, Some(category), _) => ApiCall::CategoryQuestions { category, page },
        (ViewMode::Search, _, Some(term)) => ApiCall::Search {
            term: term.clone(),
            page,
        },
        _ => ApiCall::ListQuestions { page },
    }
}

/// What: Fetch page `page` of the current mode's result set.
///
/// Inputs:
/// - `app`: View state; unchanged until the response arrives.
/// - `api_tx`: Request channel to the API worker.
/// - `page`: Requested page (values below 1 are raised to 1).
///
/// Output:
/// - Request id of the fetch.
///
/// Details:
/// - `page` is committed by the response handler only on success, so a failed
///   fetch leaves the visible page untouched.
pub fn load_page(
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
    page: u32,
) -> u64 {
    let call = listing_call(app, page.max(1));
    dispatch(app, api_tx, call)
}

/// Re-fetch the current page of the current mode.
pub fn reload(app: &mut AppState, api_tx: &mpsc::UnboundedSender<ApiRequest>) -> u64 {
    let page = app.page;
    load_page(app, api_tx, page)
}

/// Switch to category mode for `category` and fetch its first page.
pub fn select_category(
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
    category: CategoryId,
) -> u64 {
    tracing::debug!(category, "select category");
    app.mode = ViewMode::InCategory;
    app.current_category = Some(category);
    app.page = 1;
    app.selected_question = 0;
    load_page(app, api_tx, 1)
}

/// Switch to search mode for `term` and fetch its first page.
pub fn submit_search(
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
    term: &str,
) -> u64 {
    tracing::debug!(term, "submit search");
    app.mode = ViewMode::Search;
    app.search_term = Some(term.to_string());
    app.page = 1;
    app.selected_question = 0;
    load_page(app, api_tx, 1)
}

/// What: Leave category/search mode and show the current page of all questions.
///
/// Details:
/// - The category filter is cleared right away; the backend also reports
///   `current_category: null` for this endpoint.
pub fn return_to_list(app: &mut AppState, api_tx: &mpsc::UnboundedSender<ApiRequest>) -> u64 {
    app.mode = ViewMode::List;
    app.current_category = None;
    app.selected_category = 0;
    app.category_state.select(Some(0));
    let page = app.page;
    load_page(app, api_tx, page)
}

/// Fetch the page after the current one; no-op on the last page.
pub fn next_page(app: &mut AppState, api_tx: &mpsc::UnboundedSender<ApiRequest>) -> Option<u64> {
    let target = app.page + 1;
    (app.page < page_count(app.total_questions)).then(|| load_page(app, api_tx, target))
}

/// Fetch the page before the current one; no-op on page 1.
pub fn prev_page(app: &mut AppState, api_tx: &mpsc::UnboundedSender<ApiRequest>) -> Option<u64> {
    let target = clamp_page(app.page.saturating_sub(1), app.total_questions);
    (app.page > 1).then(|| load_page(app, api_tx, target))
}

/// Ask the backend for the full category list.
pub fn load_categories(app: &mut AppState, api_tx: &mpsc::UnboundedSender<ApiRequest>) -> u64 {
    dispatch(app, api_tx, ApiCall::Categories)
}

/// What: Start deleting question `id`.
///
/// Details:
/// - With confirmation enabled this only opens the confirmation dialog; nothing
///   is sent until `confirm_delete` runs.
/// - With confirmation disabled the delete is sent immediately.
pub fn request_delete(
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
    id: QuestionId,
) {
    if !app.confirm_delete {
        confirm_delete(app, api_tx, id);
        return;
    }
    let question = app
        .questions
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.question.clone())
        .unwrap_or_default();
    app.modal = Modal::ConfirmDelete { id, question };
}

/// Send `DELETE /questions/{id}`; the reload follows when the delete succeeds.
pub fn confirm_delete(
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
    id: QuestionId,
) -> u64 {
    app.modal = Modal::None;
    tracing::info!(id, "deleting question");
    dispatch(app, api_tx, ApiCall::Delete { id })
}

/// Toggle the answer of the selected question.
pub fn toggle_answer(app: &mut AppState) {
    if let Some(id) = app.selected().map(|q| q.id) {
        if !app.revealed.remove(&id) {
            app.revealed.insert(id);
        }
    }
}

/// Move the question selection by `delta`, clamped to the list.
pub fn move_question_selection(app: &mut AppState, delta: isize) {
    if app.questions.is_empty() {
        return;
    }
    let last = app.questions.len() - 1;
    app.selected_question = app.selected_question.saturating_add_signed(delta).min(last);
    app.question_state.select(Some(app.selected_question));
}

/// Move the category selection by `delta`; entry 0 is "All questions".
pub fn move_category_selection(app: &mut AppState, delta: isize) {
    let last = app.categories.len();
    app.selected_category = app.selected_category.saturating_add_signed(delta).min(last);
    app.category_state.select(Some(app.selected_category));
}

/// Activate the highlighted category pane entry.
pub fn activate_selected_category(
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) -> u64 {
    match app.category_at(app.selected_category) {
        Some(id) => select_category(app, api_tx, id),
        None => return_to_list(app, api_tx),
    }
}
