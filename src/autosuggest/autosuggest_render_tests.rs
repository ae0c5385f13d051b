//! Tests for suggestion popup rendering

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const TEST_WIDTH: u16 = 40;
const TEST_HEIGHT: u16 = 12;

fn suggestion(index: usize, text: &str, focused: bool) -> RenderedSuggestion<Line<'static>> {
    RenderedSuggestion {
        index,
        id: format!("list--item-{}", index),
        focused,
        content: Line::from(text.to_string()),
    }
}

fn render(suggestions: Vec<RenderedSuggestion<Line<'static>>>) -> (String, Option<Rect>) {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut area = None;
    terminal
        .draw(|f| {
            let input_area = Rect::new(0, 0, TEST_WIDTH, 3);
            area = render_popup(f, input_area, suggestions);
        })
        .unwrap();
    (terminal.backend().to_string(), area)
}

#[test]
fn test_empty_suggestions_render_nothing() {
    let (output, area) = render(Vec::new());
    assert!(area.is_none());
    assert!(!output.contains("Suggestions"));
}

#[test]
fn test_popup_placed_below_input() {
    let (output, area) = render(vec![
        suggestion(0, "Java", false),
        suggestion(1, "Javascript", false),
    ]);

    // "Javascript" (10) + padding (5)
    assert_eq!(area, Some(Rect::new(1, 3, 16, 4)));
    assert!(output.contains("Java"));
    assert!(output.contains("Javascript"));
}

#[test]
fn test_popup_width_has_minimum() {
    let (_, area) = render(vec![suggestion(0, "C", false)]);
    assert_eq!(area.map(|a| a.width), Some(16));
}

#[test]
fn test_popup_width_is_capped_by_input() {
    let long = "x".repeat(80);
    let (_, area) = render(vec![suggestion(0, &long, false)]);
    assert_eq!(area.map(|a| a.width), Some(TEST_WIDTH - 2));
}

#[test]
fn test_popup_width_saturates_for_huge_suggestions() {
    let input_area = Rect::new(0, 0, 200, 3);
    let bounds = Rect::new(0, 0, 200, 20);
    let huge = suggestion(0, &"x".repeat(usize::from(u16::MAX) + 5), false);

    let area = popup_area(input_area, bounds, &[huge]);

    assert_eq!(area.map(|a| a.width), Some(MAX_POPUP_WIDTH));
}

#[test]
fn test_focused_row_has_marker() {
    let (output, _) = render(vec![
        suggestion(0, "Perl", false),
        suggestion(1, "PHP", true),
    ]);

    assert!(output.contains("► PHP"));
    assert!(!output.contains("► Perl"));
}

#[test]
fn test_popup_area_needs_room_for_a_row() {
    let input_area = Rect::new(0, 0, 40, 3);
    let bounds = Rect::new(0, 0, 40, 5);

    let area = popup_area(input_area, bounds, &[suggestion(0, "Go", false)]);

    assert!(area.is_none());
}

#[test]
fn test_line_width_counts_wide_characters() {
    let line = Line::from(vec![Span::raw("日本"), Span::raw("go")]);
    assert_eq!(line_width(&line), 6);
}

#[test]
fn test_suggestion_at_maps_rows() {
    let area = Rect::new(1, 3, 16, 5);

    assert_eq!(suggestion_at(area, 3, 5, 4), Some(0));
    assert_eq!(suggestion_at(area, 3, 5, 6), Some(2));
    assert_eq!(suggestion_at(area, 3, 5, 3), None);
    assert_eq!(suggestion_at(area, 3, 1, 4), None);
    assert_eq!(suggestion_at(area, 2, 5, 6), None);
}
