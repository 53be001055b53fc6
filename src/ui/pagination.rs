use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::config::theme;
use crate::logic::pagination::page_indicators;
use crate::state::AppState;

/// One laid-out page indicator: page number, column and row inside the bar, width.
pub type IndicatorSlot = (u32, u16, u16, u16);

/// What: Lay out the pagination bar, wrapping indicators onto new rows at `width`.
///
/// Inputs:
/// - `total`: Size of the result set.
/// - `current`: Page currently shown.
/// - `width`: Usable columns inside the bar.
///
/// Output:
/// - One styled line per row, plus a slot for every indicator.
///
/// Details:
/// - Each indicator is drawn as ` N `; the active one is inverted and bold.
/// - Indicators are never split; one wider than `width` gets a row of its own.
#[must_use]
pub fn pagination_lines(
    total: u32,
    current: u32,
    width: u16,
) -> (Vec<Line<'static>>, Vec<IndicatorSlot>) {
    let th = theme();
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut slots = Vec::new();
    let mut col: u16 = 0;
    let mut row: u16 = 0;
    for ind in page_indicators(total, current) {
        let label = format!(" {} ", ind.number);
        let w = u16::try_from(label.len()).unwrap_or(u16::MAX);
        if col > 0 && col.saturating_add(w) > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            row = row.saturating_add(1);
            col = 0;
        }
        let style = if ind.active {
            Style::default()
                .fg(th.crust)
                .bg(th.mauve)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        spans.push(Span::styled(label, style));
        slots.push((ind.number, col, row, w));
        col = col.saturating_add(w);
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    (lines, slots)
}

/// What: Height the bar needs (borders included) to show every indicator at `outer_width`.
#[must_use]
pub fn bar_height(total: u32, current: u32, outer_width: u16) -> u16 {
    let (lines, _) = pagination_lines(total, current, outer_width.saturating_sub(2));
    u16::try_from(lines.len().max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// What: Render the pagination bar and record a click hit-box per drawn indicator.
///
/// Details:
/// - Rows that do not fit the bar's height are clipped and get no hit-box.
pub(super) fn render_pagination(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled("Pages", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let inner = block.inner(area);
    let (lines, slots) = pagination_lines(app.total_questions, app.page, inner.width);
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.base))
            .block(block),
        area,
    );

    app.page_rects = slots
        .into_iter()
        .filter(|(_, col, row, w)| *row < inner.height && col.saturating_add(*w) <= inner.width)
        .map(|(page, col, row, w)| (page, Rect::new(inner.x + col, inner.y + row, w, 1)))
        .collect();
}
