use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::view::confirm_delete;
use crate::state::{ApiRequest, AppState, Modal};

/// What: Handle a key while a modal is open.
///
/// Details:
/// - Alert: Enter, Esc, Space or `q` dismiss it; everything else is swallowed.
/// - Delete confirmation: Enter or `y` deletes; Esc or `n` cancels without a request.
pub(super) fn handle_modal_key(
    ke: KeyEvent,
    app: &mut AppState,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
) {
    match app.modal.clone() {
        Modal::None => {}
        Modal::Alert { .. } => {
            if matches!(
                ke.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'q')
            ) {
                app.modal = Modal::None;
            }
        }
        Modal::ConfirmDelete { id, .. } => match ke.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                confirm_delete(app, api_tx, id);
            }
            KeyCode::Esc | KeyCode::Char('n' | 'N') => {
                tracing::debug!(id, "delete cancelled");
                app.modal = Modal::None;
            }
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApiCall;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    /// What: The alert swallows unrelated keys and closes on Enter.
    fn alert_blocks_until_dismissed() {
        let mut app = AppState::default();
        app.modal = Modal::request_failed();
        let (tx, mut rx) = mpsc::unbounded_channel();

        handle_modal_key(press(KeyCode::Char('r')), &mut app, &tx);
        assert!(app.modal.is_open());
        assert!(rx.try_recv().is_err());

        handle_modal_key(press(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Confirming sends one DELETE; cancelling sends nothing.
    fn confirm_and_cancel_delete() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.modal = Modal::ConfirmDelete {
            id: 4,
            question: "Why?".into(),
        };
        handle_modal_key(press(KeyCode::Char('n')), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
        assert!(rx.try_recv().is_err());

        app.modal = Modal::ConfirmDelete {
            id: 4,
            question: "Why?".into(),
        };
        handle_modal_key(press(KeyCode::Char('y')), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(rx.try_recv().expect("delete").call, ApiCall::Delete { id: 4 });
        assert!(rx.try_recv().is_err());
    }
}
