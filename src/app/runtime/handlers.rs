use tokio::sync::mpsc;

use crate::logic::pagination::clamp_page;
use crate::logic::view::{load_page, return_to_list};
use crate::state::{
    ApiCall, ApiPayload, ApiRequest, ApiResponse, AppState, Modal, QuestionPage, ViewMode,
};

/// What: Merge an API response into the view state.
///
/// Inputs:
/// - `app`: Application state
/// - `resp`: Response delivered by the API worker
/// - `api_tx`: Request channel, used for the reload that follows a delete
///
/// Details:
/// - Listing responses other than the latest requested one are discarded.
/// - Any failure raises the generic request-failed alert and leaves the loaded
///   questions, total and page as they were.
/// - A successful delete reloads the current page of the plain list exactly once.
pub fn handle_api_response(
    app: &mut AppState,
    resp: ApiResponse,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) {
    let ApiResponse { id, call, result } = resp;
    if let Some(page) = call.page() {
        if id != app.latest_request_id {
            tracing::debug!(id, latest = app.latest_request_id, "discarding stale response");
            return;
        }
        app.loading = false;
        match result {
            Ok(ApiPayload::Page(body)) => apply_page(app, page, body, api_tx),
            Ok(other) => tracing::warn!(id, payload = ?other, "unexpected payload for listing call"),
            Err(e) => {
                tracing::warn!(id, error = %e, "listing request failed");
                app.modal = Modal::request_failed();
            }
        }
        return;
    }
    match (call, result) {
        (ApiCall::Delete { id: qid }, Ok(_)) => {
            tracing::info!(id = qid, "question deleted; reloading list");
            app.revealed.remove(&qid);
            // Deleting the only question on the last page of the plain list
            // would otherwise reload a page that no longer exists.
            if app.mode == ViewMode::List {
                app.page = clamp_page(app.page, app.total_questions.saturating_sub(1));
            }
            return_to_list(app, api_tx);
        }
        (ApiCall::Categories, Ok(ApiPayload::Categories(categories))) => {
            tracing::debug!(count = categories.len(), "categories loaded");
            app.categories = categories;
            sync_category_selection(app);
        }
        (call, Ok(other)) => {
            tracing::warn!(id, call = ?call, payload = ?other, "unexpected payload");
        }
        (call, Err(e)) => {
            tracing::warn!(id, call = ?call, error = %e, "request failed");
            app.modal = Modal::request_failed();
        }
    }
}

/// What: Replace the loaded page with `body` and commit `requested` as the current page.
///
/// Details:
/// - `categories` is replaced only when the response carries it.
/// - The page is clamped into the range the new total allows. When the clamp
///   moves it, the clamped page is fetched so the list matches the highlighted page.
fn apply_page(
    app: &mut AppState,
    requested: u32,
    body: QuestionPage,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) {
    app.questions = body.questions;
    app.total_questions = body.total_questions;
    if let Some(categories) = body.categories {
        app.categories = categories;
    }
    app.current_category = body.current_category;
    app.page = clamp_page(requested, app.total_questions);
    app.clamp_question_selection();
    sync_category_selection(app);
    tracing::debug!(
        mode = app.mode.label(),
        page = app.page,
        total = app.total_questions,
        shown = app.questions.len(),
        "page applied"
    );
    if app.page != requested {
        tracing::debug!(requested, page = app.page, "requested page out of range; refetching");
        let page = app.page;
        load_page(app, api_tx, page);
    }
}

/// Point the category pane at the active filter (entry 0 when unfiltered).
fn sync_category_selection(app: &mut AppState) {
    app.selected_category = app
        .current_category
        .and_then(|id| app.categories.iter().position(|c| c.id == id))
        .map_or(0, |i| i + 1);
    app.clamp_category_selection();
}
