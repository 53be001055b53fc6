use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::config::theme;
use crate::state::{AppState, CategoryId, Focus, ViewMode};

/// What: Render the category pane and record one hit-box per visible entry.
///
/// Details:
/// - Entry 0 is "All questions" (the unfiltered list); the entry matching the
///   active filter is marked with a bullet.
pub(super) fn render_categories(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Categories;
    let active: Option<Option<CategoryId>> = match app.mode {
        ViewMode::List => Some(None),
        ViewMode::InCategory => Some(app.current_category),
        ViewMode::Search => None,
    };

    let entries: Vec<(Option<CategoryId>, String)> = std::iter::once((None, "All questions".to_string()))
        .chain(app.categories.iter().map(|c| (Some(c.id), c.kind.clone())))
        .collect();

    let items: Vec<ListItem> = entries
        .iter()
        .map(|(id, label)| {
            let is_active = active == Some(*id);
            let marker = if is_active { "● " } else { "  " };
            let mut style = Style::default().fg(if focused { th.text } else { th.subtext0 });
            if is_active {
                style = style.fg(th.green).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(th.green)),
                Span::styled(label.clone(), style),
            ]))
        })
        .collect();

    let border = if focused { th.mauve } else { th.surface1 };
    let block = Block::default()
        .title(Span::styled(
            if focused {
                "Categories (focused)"
            } else {
                "Categories"
            },
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    app.clamp_category_selection();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(if focused {
            Style::default().fg(th.crust).bg(th.lavender)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        });
    f.render_stateful_widget(list, area, &mut app.category_state);

    let offset = app.category_state.offset();
    app.category_rects = entries
        .iter()
        .skip(offset)
        .take(inner.height as usize)
        .enumerate()
        .map(|(row, (id, _))| {
            let y = inner.y + u16::try_from(row).unwrap_or(u16::MAX);
            (*id, Rect::new(inner.x, y, inner.width, 1))
        })
        .collect();
}
