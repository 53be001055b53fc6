//! Rendering for the question view.
//!
//! Layout: categories and the search box on the left, the question list on the
//! right, the pagination bar and a key hint line along the bottom. Modals are
//! drawn last, centered over everything.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::config::theme;
use crate::state::AppState;

mod categories;
mod modals;
pub mod pagination;
mod questions;
mod search;

/// Draw one full frame and record click hit-boxes in `app`.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    // The pagination bar grows to show every indicator, but never below the
    // 5 rows reserved for the panes and the footer line.
    let bar = pagination::bar_height(app.total_questions, app.page, area.width)
        .min(area.height.saturating_sub(6).max(3));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(bar),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(columns[0]);

    categories::render_categories(f, app, left[0]);
    search::render_search(f, app, left[1]);
    questions::render_questions(f, app, columns[1]);
    pagination::render_pagination(f, app, rows[1]);
    render_footer(f, rows[2]);

    modals::render_modal(f, app, area);
}

/// Single-line key reference.
fn render_footer(f: &mut Frame, area: ratatui::prelude::Rect) {
    let th = theme();
    let hints = [
        ("Tab", "focus"),
        ("/", "search"),
        ("Enter", "select/answer"),
        ("d", "delete"),
        ("←/→", "page"),
        ("a", "all"),
        ("r", "reload"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, what) in hints {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(th.mauve)));
        spans.push(Span::styled(format!("{what} "), Style::default().fg(th.overlay1)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, Modal, Question};
    use ratatui::{Terminal, backend::TestBackend};

    /// What: Flatten the rendered buffer into one string for substring checks.
    fn buffer_text(term: &Terminal<TestBackend>) -> String {
        term.backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn sample_app() -> AppState {
        let mut app = AppState::default();
        app.categories = vec![
            Category {
                id: 1,
                kind: "Science".into(),
            },
            Category {
                id: 2,
                kind: "Art".into(),
            },
        ];
        app.questions = vec![Question {
            id: 5,
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into(),
            answer: "Maya Angelou".into(),
            category: 2,
            difficulty: 2,
        }];
        app.total_questions = 23;
        app.clamp_question_selection();
        app
    }

    #[test]
    /// What: A full frame renders categories, the question, and three page indicators.
    ///
    /// Inputs:
    /// - Two categories, one question, 23 total questions, on a 120x40 backend.
    ///
    /// Output:
    /// - Category names and question text visible; 3 page hit-boxes and 3 category hit-boxes.
    fn full_frame_renders_and_records_hitboxes() {
        let mut term = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        let mut app = sample_app();
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = buffer_text(&term);
        assert!(text.contains("Science"));
        assert!(text.contains("Caged Bird"));
        assert!(text.contains("Art"));
        assert_eq!(app.page_rects.len(), 3);
        assert_eq!(app.category_rects.len(), 3);
        assert_eq!(app.question_rects.len(), 1);
    }

    #[test]
    /// What: With many pages the bar grows so every indicator is clickable.
    ///
    /// Inputs:
    /// - 500 questions on an 80x24 terminal.
    ///
    /// Output:
    /// - 50 page hit-boxes, all inside the frame.
    fn many_pages_all_clickable_at_80_columns() {
        let mut term = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        let mut app = sample_app();
        app.total_questions = 500;
        term.draw(|f| ui(f, &mut app)).expect("draw");
        assert_eq!(app.page_rects.len(), 50);
        assert!(app.page_rects.iter().all(|(_, r)| r.y < 24 && r.x + r.width <= 80));
    }

    #[test]
    /// What: The alert modal shows the request-failed message.
    fn alert_modal_renders_message() {
        let mut term = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        let mut app = sample_app();
        app.modal = Modal::request_failed();
        term.draw(|f| ui(f, &mut app)).expect("draw");
        assert!(buffer_text(&term).contains("Unable to load questions"));
    }

    #[test]
    /// What: Tiny terminals render without panicking.
    fn small_terminal_does_not_panic() {
        let mut term = Terminal::new(TestBackend::new(20, 6)).expect("terminal");
        let mut app = sample_app();
        app.modal = Modal::ConfirmDelete {
            id: 5,
            question: "long question text".into(),
        };
        term.draw(|f| ui(f, &mut app)).expect("draw");
    }
}
