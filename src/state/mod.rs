//! View state: the question view's owned data plus UI bookkeeping.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::{Modal, REQUEST_FAILED_MESSAGE};
pub use types::{
    ApiCall, ApiPayload, ApiRequest, ApiResponse, Category, CategoryId, CategoryList, Focus,
    QUESTIONS_PER_PAGE, Question, QuestionId, QuestionPage, ViewMode, category_label,
};
