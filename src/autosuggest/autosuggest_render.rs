//! Suggestion popup rendering
//!
//! Draws the output of [`Autosuggest::render`](super::Autosuggest::render)
//! as a listbox directly below the input field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::autosuggest_state::RenderedSuggestion;
use crate::widgets::popup;

const MAX_POPUP_WIDTH: u16 = 60;
const MIN_POPUP_WIDTH: u16 = 16;
const POPUP_BORDER_HEIGHT: u16 = 2;
// Borders (2) + focus marker (2) + trailing space (1)
const POPUP_PADDING: u16 = 5;
const POPUP_OFFSET_X: u16 = 1;

const FOCUS_MARKER: &str = "► ";
const BLANK_MARKER: &str = "  ";

/// Display width of a rendered line
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|span| UnicodeWidthStr::width(&*span.content))
        .sum()
}

/// Area the popup will occupy for `suggestions` below `input_area`
pub fn popup_area(
    input_area: Rect,
    bounds: Rect,
    suggestions: &[RenderedSuggestion<Line<'static>>],
) -> Option<Rect> {
    if suggestions.is_empty() {
        return None;
    }

    let content_width = suggestions
        .iter()
        .map(|s| line_width(&s.content))
        .max()
        .unwrap_or(0);
    let popup_width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_PADDING)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_height = u16::try_from(suggestions.len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_HEIGHT);

    let area = popup::popup_below_anchor(input_area, bounds, popup_width, popup_height, POPUP_OFFSET_X);
    if area.height <= POPUP_BORDER_HEIGHT || area.width == 0 {
        return None;
    }
    Some(area)
}

/// Render the suggestions popup and return where it was drawn
pub fn render_popup(
    frame: &mut Frame,
    input_area: Rect,
    suggestions: Vec<RenderedSuggestion<Line<'static>>>,
) -> Option<Rect> {
    let area = popup_area(input_area, frame.area(), &suggestions)?;

    let items: Vec<ListItem> = suggestions
        .into_iter()
        .map(|suggestion| {
            let line = if suggestion.focused {
                let focused_style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                let mut spans = vec![Span::styled(FOCUS_MARKER, focused_style)];
                spans.extend(
                    suggestion
                        .content
                        .spans
                        .into_iter()
                        .map(|span| span.patch_style(focused_style)),
                );
                Line::from(spans).style(focused_style)
            } else {
                let mut spans = vec![Span::raw(BLANK_MARKER)];
                spans.extend(suggestion.content.spans);
                Line::from(spans).style(Style::default().fg(Color::White).bg(Color::Black))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, area);
    Some(area)
}

/// Index of the suggestion row under (`column`, `row`), if any
pub fn suggestion_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let inner = popup::inner_rect(area);
    if !popup::contains(inner, column, row) {
        return None;
    }
    let index = usize::from(row - inner.y);
    (index < count).then_some(index)
}

#[cfg(test)]
#[path = "autosuggest_render_tests.rs"]
mod autosuggest_render_tests;
