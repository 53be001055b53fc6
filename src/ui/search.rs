use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::config::theme;
use crate::state::{AppState, Focus};

/// Render the search input; the terminal cursor follows the text while it is focused.
pub(super) fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let prompt = "> ";
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(th.sapphire)),
        Span::styled(
            app.search_input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let block = Block::default()
        .title(Span::styled(
            "Search (/)",
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new(line)
            .style(Style::default().bg(th.base))
            .block(block),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        let typed = u16::try_from(prompt.width() + app.search_input.width()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(typed)
            .min(inner.x + inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}
