use tokio::sync::mpsc;

use crate::logic::view::{load_categories, load_page};
use crate::state::{ApiRequest, AppState, CategoryId, ViewMode};

/// What: Where the view opens.
///
/// Details:
/// - `search` wins over `category` when both are given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartView {
    /// Page to open (1-based).
    pub page: u32,
    /// Open filtered to this category.
    pub category: Option<CategoryId>,
    /// Open with this search submitted.
    pub search: Option<String>,
}

/// What: Issue the requests that populate the first frame.
///
/// Details:
/// - The plain list endpoint returns categories with the questions; the
///   category and search endpoints do not, so those start views also fetch
///   `GET /categories` to resolve labels.
/// - The mode is set up front so the start page is fetched with a single
///   listing request in any mode.
pub fn send_initial_requests(
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
    start: &StartView,
) {
    let page = start.page.max(1);
    if let Some(term) = start.search.as_deref() {
        app.mode = ViewMode::Search;
        app.search_term = Some(term.to_string());
        app.search_input = term.to_string();
        load_categories(app, api_tx);
    } else if let Some(category) = start.category {
        app.mode = ViewMode::InCategory;
        app.current_category = Some(category);
        load_categories(app, api_tx);
    }
    tracing::debug!(mode = app.mode.label(), page, "initial fetch");
    load_page(app, api_tx, page);
}
