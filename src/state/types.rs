//! Core value types used by the question view state.

use serde::{Deserialize, Serialize};

/// Identifier of a category as assigned by the backend.
pub type CategoryId = u64;

/// Identifier of a question as assigned by the backend.
pub type QuestionId = u64;

/// Number of questions the backend returns per page.
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// A single trivia question as returned by the question endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Backend identifier, used for deletion.
    pub id: QuestionId,
    /// Question text shown in the list.
    pub question: String,
    /// Answer text, hidden until revealed.
    pub answer: String,
    /// Identifier of the owning category.
    pub category: CategoryId,
    /// Difficulty rating (1 = easiest).
    pub difficulty: u8,
}

/// A labeled grouping of questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier.
    pub id: CategoryId,
    /// Display name (the backend calls this field `type`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// What: Resolve the display label of category `id` among `categories`.
///
/// Output:
/// - The matching category's name, or `Category <id>` when none matches.
#[must_use]
pub fn category_label(categories: &[Category], id: CategoryId) -> String {
    categories
        .iter()
        .find(|c| c.id == id)
        .map_or_else(|| format!("Category {id}"), |c| c.kind.clone())
}

/// What: Browsing context that decides which endpoint paging uses.
///
/// Details:
/// - `List` pages through all questions.
/// - `InCategory` pages through the questions of `AppState::current_category`.
/// - `Search` pages through the results for `AppState::search_term`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// All questions.
    #[default]
    List,
    /// Questions of one category.
    InCategory,
    /// Free-text search results.
    Search,
}

impl ViewMode {
    /// Short label used in pane titles and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::List => "all",
            Self::InCategory => "category",
            Self::Search => "search",
        }
    }
}

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Category list on the left.
    Categories,
    /// Question list on the right.
    #[default]
    Questions,
    /// Search input box.
    Search,
}

/// One page of questions as decoded from any of the listing endpoints.
///
/// `categories` is only present on the plain list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionPage {
    /// Questions on the requested page.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Size of the whole result set, across all pages.
    #[serde(default)]
    pub total_questions: u32,
    /// Full category list, when the endpoint includes it.
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    /// Category filter reported by the backend (`null` for none).
    #[serde(default)]
    pub current_category: Option<CategoryId>,
}

/// Body of `GET /categories`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryList {
    /// Every known category.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// What: A fetch the view wants the API worker to perform.
///
/// Details:
/// - Listing variants carry the page they ask for; the page is committed to
///   state only when the response succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    /// `GET /questions?page=N`
    ListQuestions {
        /// Requested page (1-based).
        page: u32,
    },
    /// `GET /categories/{id}/questions?page=N`
    CategoryQuestions {
        /// Category filter.
        category: CategoryId,
        /// Requested page (1-based).
        page: u32,
    },
    /// `POST /questions?page=N` with `{ "search_term": term }`
    Search {
        /// Free-text term.
        term: String,
        /// Requested page (1-based).
        page: u32,
    },
    /// `DELETE /questions/{id}`
    Delete {
        /// Question to delete.
        id: QuestionId,
    },
    /// `GET /categories`
    Categories,
}

impl ApiCall {
    /// Page requested by listing calls; `None` for delete/categories.
    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        match self {
            Self::ListQuestions { page }
            | Self::CategoryQuestions { page, .. }
            | Self::Search { page, .. } => Some(*page),
            Self::Delete { .. } | Self::Categories => None,
        }
    }
}

/// A request sent from the view to the API worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// What to fetch.
    pub call: ApiCall,
}

/// Successful payload of an [`ApiCall`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiPayload {
    /// Any of the listing calls.
    Page(QuestionPage),
    /// Delete acknowledged.
    Deleted(QuestionId),
    /// Category list.
    Categories(Vec<Category>),
}

/// Outcome of an [`ApiRequest`] delivered back to the main loop.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// The call that produced this response.
    pub call: ApiCall,
    /// Payload on success; a log-friendly description of the failure otherwise.
    pub result: Result<ApiPayload, String>,
}
