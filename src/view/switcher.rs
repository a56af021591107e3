//! Quick switcher overlay rendering.

use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{IconHint, SearchResult};
use crate::state::SwitcherState;

/// Overlay title.
pub const TITLE: &str = " Jump to... ";

/// Columns reserved for the icon glyph and its gap.
const ICON_COLUMNS: usize = 3;

/// Overlay geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Width as a percentage of the terminal width.
    pub width_percent: u16,
    /// Total overlay height in rows, borders included.
    pub height: u16,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            width_percent: 40,
            height: 15,
        }
    }
}

impl OverlayLayout {
    /// Result rows that fit below the input line.
    pub fn result_rows(&self, area: Rect) -> usize {
        // Two border rows plus the input line.
        overlay_rect(self, area).height.saturating_sub(3) as usize
    }
}

/// Render the switcher overlay centered over whatever is on screen.
///
/// Scrolls the result list so the focused row stays visible.
pub fn render_switcher(frame: &mut Frame, state: &mut SwitcherState, layout: &OverlayLayout) {
    let area = overlay_rect(layout, frame.area());
    if area.width < 3 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::White))
        .style(Style::default().bg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    frame.render_widget(
        Paragraph::new(input_line(state.query(), state.cursor())),
        input_area,
    );

    let rows = list_area.height as usize;
    if rows == 0 {
        return;
    }
    state.adjust_scroll(rows);

    let label_width = (list_area.width as usize).saturating_sub(ICON_COLUMNS);
    let items: Vec<ListItem> = state
        .results()
        .iter()
        .map(|result| result_item(result, label_width))
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let selected = (!state.results().is_empty()).then_some(state.selected_index());
    let mut list_state = ListState::default()
        .with_offset(state.scroll_offset())
        .with_selected(selected);

    frame.render_stateful_widget(list, list_area, &mut list_state);
}

/// Centered rect `width_percent` wide and `height` tall, clipped to `area`.
pub fn overlay_rect(layout: &OverlayLayout, area: Rect) -> Rect {
    let percent = u32::from(layout.width_percent.min(100));
    let width = (u32::from(area.width) * percent / 100) as u16;
    let width = width.max(20).min(area.width);
    let height = layout.height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Glyph and style for an icon hint.
pub fn icon_glyph(icon: IconHint) -> (&'static str, Style) {
    match icon {
        IconHint::Channel => ("#", Style::default().fg(Color::White)),
        IconHint::PrivateChannel => ("🔒", Style::default().fg(Color::Yellow)),
        IconHint::Bot => ("⚙", Style::default().fg(Color::Magenta)),
        IconHint::Online => ("●", Style::default().fg(Color::Green)),
        IconHint::Offline => ("○", Style::default().fg(Color::Gray)),
        IconHint::Group => ("≡", Style::default().fg(Color::Blue)),
    }
}

fn result_item(result: &SearchResult, label_width: usize) -> ListItem<'static> {
    let (glyph, style) = icon_glyph(result.icon);
    let pad = ICON_COLUMNS.saturating_sub(glyph.width());
    ListItem::new(Line::from(vec![
        Span::styled(glyph, style),
        Span::raw(" ".repeat(pad)),
        Span::raw(truncate_to_width(&result.label, label_width)),
    ]))
}

fn input_line(query: &str, cursor: usize) -> Line<'static> {
    let before: String = query.chars().take(cursor).collect();
    let mut rest = query.chars().skip(cursor);
    let at_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();

    Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(before),
        Span::styled(
            at_cursor,
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(after),
    ])
}

/// Cut `text` to at most `max_width` display columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "switcher_tests.rs"]
mod tests;
