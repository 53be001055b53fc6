use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::config::theme;
use crate::state::{AppState, Focus, Question, ViewMode};

/// Lines a question row occupies: text, meta line, and the answer when revealed.
fn row_height(app: &AppState, q: &Question) -> u16 {
    if app.is_revealed(q.id) { 3 } else { 2 }
}

/// Build one question row.
fn question_item(app: &AppState, q: &Question) -> ListItem<'static> {
    let th = theme();
    let mut lines = vec![
        Line::from(Span::styled(
            q.question.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("   {}", app.category_label(q.category)),
                Style::default().fg(th.sapphire),
            ),
            Span::styled("  ·  ", Style::default().fg(th.overlay1)),
            Span::styled(
                format!("Difficulty: {}", q.difficulty),
                Style::default().fg(th.yellow),
            ),
        ]),
    ];
    if app.is_revealed(q.id) {
        lines.push(Line::from(vec![
            Span::styled("   Answer: ", Style::default().fg(th.overlay1)),
            Span::styled(q.answer.clone(), Style::default().fg(th.green)),
        ]));
    }
    ListItem::new(lines)
}

/// Pane title describing the current mode and result count.
fn title(app: &AppState) -> String {
    let scope = match app.mode {
        ViewMode::List => "all".to_string(),
        ViewMode::InCategory => app
            .current_category
            .map_or_else(|| "category".to_string(), |id| app.category_label(id)),
        ViewMode::Search => format!(
            "search \"{}\"",
            app.search_term.as_deref().unwrap_or_default()
        ),
    };
    let loading = if app.loading { "  loading…" } else { "" };
    format!("Questions · {scope} · {} total{loading}", app.total_questions)
}

/// What: Render the question list and record one hit-box per visible row.
///
/// Details:
/// - Rows are multi-line, so hit-boxes are laid out by accumulating row heights
///   from the list's scroll offset.
pub(super) fn render_questions(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Questions;
    let block = Block::default()
        .title(Span::styled(
            title(app),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let inner = block.inner(area);

    if app.questions.is_empty() {
        app.question_rects.clear();
        let msg = if app.loading {
            "Loading questions…"
        } else {
            "No questions to show"
        };
        f.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(th.subtext0)))
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(th.base))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app.questions.iter().map(|q| question_item(app, q)).collect();
    app.clamp_question_selection();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.question_state);

    let offset = app.question_state.offset();
    let bottom = inner.y.saturating_add(inner.height);
    let mut y = inner.y;
    let mut rects = Vec::new();
    for (idx, q) in app.questions.iter().enumerate().skip(offset) {
        if y >= bottom {
            break;
        }
        let h = row_height(app, q).min(bottom - y);
        rects.push((idx, Rect::new(inner.x, y, inner.width, h)));
        y += h;
    }
    app.question_rects = rects;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Category;

    #[test]
    /// What: The title names the active scope.
    fn title_reflects_mode() {
        let mut app = AppState::default();
        app.total_questions = 7;
        assert_eq!(title(&app), "Questions · all · 7 total");

        app.categories = vec![Category {
            id: 3,
            kind: "Geography".into(),
        }];
        app.mode = ViewMode::InCategory;
        app.current_category = Some(3);
        assert_eq!(title(&app), "Questions · Geography · 7 total");

        app.mode = ViewMode::Search;
        app.search_term = Some("lake".into());
        app.loading = true;
        assert_eq!(title(&app), "Questions · search \"lake\" · 7 total  loading…");
    }

    #[test]
    /// What: Revealed rows take an extra line for the answer.
    fn revealed_rows_are_taller() {
        let mut app = AppState::default();
        let q = Question {
            id: 1,
            question: "q".into(),
            answer: "a".into(),
            category: 1,
            difficulty: 1,
        };
        assert_eq!(row_height(&app, &q), 2);
        app.revealed.insert(1);
        assert_eq!(row_height(&app, &q), 3);
    }
}
