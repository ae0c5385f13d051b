use ratatui::style::Modifier;

use super::*;
use crate::autosuggest::{ChangeMethod, SelectionMethod};

fn span_texts(line: &Line<'_>) -> Vec<(String, bool)> {
    line.spans
        .iter()
        .map(|s| {
            (
                s.content.to_string(),
                s.style.add_modifier.contains(Modifier::BOLD),
            )
        })
        .collect()
}

#[test]
fn test_highlight_line_bold_prefix() {
    let line = highlight_line("Ruby", &[0]);
    assert_eq!(
        span_texts(&line),
        vec![("R".to_string(), true), ("uby".to_string(), false)]
    );
}

#[test]
fn test_highlight_line_scattered_indices() {
    let line = highlight_line("Javascript", &[0, 2, 4]);
    let texts: Vec<String> = span_texts(&line).into_iter().map(|(t, _)| t).collect();
    assert_eq!(texts, vec!["J", "a", "v", "a", "s", "cript"]);
}

#[test]
fn test_highlight_line_without_indices() {
    let line = highlight_line("Go", &[]);
    assert_eq!(span_texts(&line), vec![("Go".to_string(), false)]);
}

#[test]
fn test_highlight_line_multibyte() {
    let line = highlight_line("Ĉu", &[0]);
    assert_eq!(
        span_texts(&line),
        vec![("Ĉ".to_string(), true), ("u".to_string(), false)]
    );
}

#[test]
fn test_render_uses_typed_text_while_previewing() {
    let mut handler = LanguageHandler::default();
    let ruby = Language::new("Ruby", 1995);

    let first = handler.render_suggestion(&ruby, "r", None);
    let preview = handler.render_suggestion(&ruby, "Ruby", Some("r"));

    assert_eq!(span_texts(&first), span_texts(&preview));
}

#[test]
fn test_should_render_suggestions() {
    let mut handler = LanguageHandler::default();
    assert!(handler.should_render_suggestions("e"));
    assert!(handler.should_render_suggestions("e "));
    assert!(!handler.should_render_suggestions(" e"));
    assert!(!handler.should_render_suggestions(""));
    assert!(!handler.should_render_suggestions("   "));
}

#[test]
fn test_suggestions_for_e() {
    let mut handler = LanguageHandler::default();
    let names: Vec<String> = handler.suggestions("e").into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["Elm"]);
}

#[test]
fn test_notifications_are_logged() {
    let mut handler = LanguageHandler::default();

    handler.on_change(&ChangeEvent {
        new_value: "c+".to_string(),
        method: ChangeMethod::Type,
    });
    handler.on_suggestion_selected(&SelectionEvent {
        suggestion: Language::new("Java", 1995),
        suggestion_value: "Java".to_string(),
        method: SelectionMethod::Enter,
    });

    let entries: Vec<&str> = handler.events().entries().collect();
    assert_eq!(
        entries,
        vec!["onChange \"c+\" (type)", "onSuggestionSelected Java 1995 (enter)"]
    );
    assert_eq!(handler.last_selected(), Some(&Language::new("Java", 1995)));
}

#[test]
fn test_event_log_is_bounded() {
    let mut log = EventLog::default();
    for i in 0..20 {
        log.push(format!("event {}", i));
    }

    assert_eq!(log.len(), EVENT_LOG_CAPACITY);
    assert_eq!(log.entries().next(), Some("event 12"));
    assert_eq!(log.last(), Some("event 19"));
}
