//! Central application state for the question view.

use std::collections::HashSet;

use ratatui::{prelude::Rect, widgets::ListState};

use crate::state::modal::Modal;
use crate::state::types::{
    Category, CategoryId, Focus, Question, QuestionId, ViewMode, category_label,
};

/// What: Everything the question view owns, mutated only on the main loop.
///
/// Details:
/// - The first block of fields is the view state proper (mode, page, loaded
///   questions and categories); the rest is UI bookkeeping.
/// - Workers never see this struct; they receive `ApiRequest`s and answer with
///   `ApiResponse`s that the main loop merges here.
#[derive(Debug)]
pub struct AppState {
    /// Current browsing context.
    pub mode: ViewMode,
    /// Term of the last submitted search.
    pub search_term: Option<String>,
    /// Questions on the current page.
    pub questions: Vec<Question>,
    /// Current page (1-based).
    pub page: u32,
    /// Size of the whole result set for the current mode.
    pub total_questions: u32,
    /// Categories known to the view, in backend order.
    pub categories: Vec<Category>,
    /// Active category filter, if any.
    pub current_category: Option<CategoryId>,

    /// Pane receiving keyboard input.
    pub focus: Focus,
    /// Selection within `questions`.
    pub selected_question: usize,
    /// Render state for the question list.
    pub question_state: ListState,
    /// Selection within the category pane; index 0 is the "All questions" entry.
    pub selected_category: usize,
    /// Render state for the category pane.
    pub category_state: ListState,
    /// Text typed into the search box.
    pub search_input: String,
    /// Questions whose answer is revealed.
    pub revealed: HashSet<QuestionId>,
    /// Reveal every answer regardless of `revealed`.
    pub show_answers: bool,
    /// Ask before deleting.
    pub confirm_delete: bool,
    /// Open dialog, if any.
    pub modal: Modal,

    /// Identifier handed to the next request.
    pub next_request_id: u64,
    /// Identifier of the newest fetch whose response is still wanted.
    pub latest_request_id: u64,
    /// A fetch is in flight.
    pub loading: bool,

    /// Page indicator hit-boxes recorded during the last render.
    pub page_rects: Vec<(u32, Rect)>,
    /// Category entry hit-boxes recorded during the last render (`None` = all questions).
    pub category_rects: Vec<(Option<CategoryId>, Rect)>,
    /// Question row hit-boxes recorded during the last render.
    pub question_rects: Vec<(usize, Rect)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: ViewMode::List,
            search_term: None,
            questions: Vec::new(),
            page: 1,
            total_questions: 0,
            categories: Vec::new(),
            current_category: None,
            focus: Focus::Questions,
            selected_question: 0,
            question_state: ListState::default(),
            selected_category: 0,
            category_state: ListState::default().with_selected(Some(0)),
            search_input: String::new(),
            revealed: HashSet::new(),
            show_answers: false,
            confirm_delete: true,
            modal: Modal::None,
            next_request_id: 1,
            latest_request_id: 0,
            loading: false,
            page_rects: Vec::new(),
            category_rects: Vec::new(),
            question_rects: Vec::new(),
        }
    }
}

impl AppState {
    /// Build a state seeded from user settings.
    #[must_use]
    pub fn with_settings(settings: &crate::config::Settings) -> Self {
        Self {
            show_answers: settings.show_answers,
            confirm_delete: settings.confirm_delete,
            ..Self::default()
        }
    }

    /// What: Resolve the display label of a category id.
    ///
    /// Output:
    /// - The matching category's name, or `Category <id>` when it is not loaded.
    #[must_use]
    pub fn category_label(&self, id: CategoryId) -> String {
        category_label(&self.categories, id)
    }

    /// Currently selected question, if the list is non-empty.
    #[must_use]
    pub fn selected(&self) -> Option<&Question> {
        self.questions.get(self.selected_question)
    }

    /// Whether the answer of `id` should be drawn.
    #[must_use]
    pub fn is_revealed(&self, id: QuestionId) -> bool {
        self.show_answers || self.revealed.contains(&id)
    }

    /// Category id behind the category pane entry at `index` (`None` = all questions).
    #[must_use]
    pub fn category_at(&self, index: usize) -> Option<CategoryId> {
        index
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .map(|c| c.id)
    }

    /// Keep the question selection inside the loaded list and mirror it to the list widget.
    pub fn clamp_question_selection(&mut self) {
        if self.questions.is_empty() {
            self.selected_question = 0;
            self.question_state.select(None);
        } else {
            self.selected_question = self.selected_question.min(self.questions.len() - 1);
            self.question_state.select(Some(self.selected_question));
        }
    }

    /// Keep the category selection inside `0..=categories.len()`.
    pub fn clamp_category_selection(&mut self) {
        self.selected_category = self.selected_category.min(self.categories.len());
        self.category_state.select(Some(self.selected_category));
    }
}
