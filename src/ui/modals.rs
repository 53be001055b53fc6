use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::config::theme;
use crate::state::{AppState, Modal};

/// What: Compute a rectangle of at most `max_w` x `max_h` centered in `area`.
///
/// Details:
/// - Never exceeds `area`, so tiny terminals cannot push the modal off-buffer.
fn centered(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(4).min(max_w).max(area.width.min(10));
    let h = max_h.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

/// Double-bordered block titled `title`, drawn in `color`, shared by every modal.
fn modal_block(title: &str, color: ratatui::style::Color) -> Block<'static> {
    let th = theme();
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(th.mantle))
}

/// Render the error alert with its dismiss hint.
fn render_alert(f: &mut Frame, area: Rect, message: &str) {
    let th = theme();
    let rect = centered(area, 70, 7);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to close",
            Style::default().fg(th.subtext0),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(modal_block("Request failed", th.red)),
        rect,
    );
}

/// Render the delete confirmation showing the question about to be removed.
fn render_confirm_delete(f: &mut Frame, area: Rect, question: &str) {
    let th = theme();
    let rect = centered(area, 70, 9);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(
            "Delete this question?",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.to_string(),
            Style::default().fg(th.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/y to delete, Esc/n to cancel",
            Style::default().fg(th.subtext0),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(modal_block("Confirm delete", th.red)),
        rect,
    );
}

/// Draw whichever modal is open, if any, on top of the frame.
pub(super) fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => render_alert(f, area, message),
        Modal::ConfirmDelete { question, .. } => render_confirm_delete(f, area, question),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Centered rects stay inside the parent area, even when it is tiny.
    fn centered_fits_inside_area() {
        let big = Rect::new(0, 0, 120, 40);
        let r = centered(big, 70, 7);
        assert_eq!((r.width, r.height), (70, 7));
        assert_eq!(r.x, 25);

        let tiny = Rect::new(0, 0, 8, 3);
        let r = centered(tiny, 70, 9);
        assert!(r.x + r.width <= tiny.width);
        assert!(r.y + r.height <= tiny.height);
    }
}
