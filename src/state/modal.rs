//! Modal dialog state for the UI.

use crate::state::types::QuestionId;

/// Message shown for every failed request.
pub const REQUEST_FAILED_MESSAGE: &str = "Unable to load questions. Please try your request again";

/// What: Dialog currently covering the view, if any.
///
/// Details:
/// - While a modal other than `None` is open it captures all input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No dialog.
    #[default]
    None,
    /// Blocking alert dismissed with Enter/Esc.
    Alert {
        /// Text shown in the dialog body.
        message: String,
    },
    /// Yes/no prompt guarding a delete.
    ConfirmDelete {
        /// Question that will be deleted on confirmation.
        id: QuestionId,
        /// Question text echoed in the prompt.
        question: String,
    },
}

impl Modal {
    /// The generic request-failure alert.
    #[must_use]
    pub fn request_failed() -> Self {
        Self::Alert {
            message: REQUEST_FAILED_MESSAGE.to_string(),
        }
    }

    /// Whether a dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
