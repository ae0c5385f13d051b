use std::collections::VecDeque;

use log::debug;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::language_data::{Language, builtin_languages};
use super::matcher::LanguageMatcher;
use crate::autosuggest::{AutosuggestHandler, ChangeEvent, SelectionEvent};

const EVENT_LOG_CAPACITY: usize = 8;

/// Most recent callback notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: VecDeque<String>,
}

impl EventLog {
    pub fn push(&mut self, entry: String) {
        if self.entries.len() == EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a line with the characters at `indices` in bold
pub fn highlight_line(text: &str, indices: &[usize]) -> Line<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut current_bold = false;

    for (i, ch) in text.chars().enumerate() {
        let is_bold = indices.contains(&i);
        if is_bold != current_bold && !current.is_empty() {
            let chunk = std::mem::take(&mut current);
            spans.push(if current_bold {
                Span::styled(chunk, bold)
            } else {
                Span::raw(chunk)
            });
        }
        current_bold = is_bold;
        current.push(ch);
    }

    if !current.is_empty() {
        spans.push(if current_bold {
            Span::styled(current, bold)
        } else {
            Span::raw(current)
        });
    }

    Line::from(spans)
}

/// Suggests programming languages for the typed text
#[derive(Debug)]
pub struct LanguageHandler {
    languages: Vec<Language>,
    matcher: LanguageMatcher,
    events: EventLog,
    last_selected: Option<Language>,
}

impl Default for LanguageHandler {
    fn default() -> Self {
        Self::new(builtin_languages(), LanguageMatcher::default())
    }
}

impl LanguageHandler {
    pub fn new(languages: Vec<Language>, matcher: LanguageMatcher) -> Self {
        Self {
            languages,
            matcher,
            events: EventLog::default(),
            last_selected: None,
        }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn last_selected(&self) -> Option<&Language> {
        self.last_selected.as_ref()
    }
}

impl AutosuggestHandler for LanguageHandler {
    type Suggestion = Language;
    type Rendered = Line<'static>;

    fn suggestions(&mut self, text: &str) -> Vec<Language> {
        self.matcher.filter(text, &self.languages)
    }

    fn suggestion_value(&mut self, suggestion: &Language) -> String {
        suggestion.name.clone()
    }

    /// Highlights against what the user typed, even while previewing
    fn render_suggestion(
        &mut self,
        suggestion: &Language,
        current_text: &str,
        previous_text: Option<&str>,
    ) -> Line<'static> {
        let query = previous_text.unwrap_or(current_text);
        let indices = self.matcher.matched_indices(&suggestion.name, query);
        highlight_line(&suggestion.name, &indices)
    }

    fn should_render_suggestions(&mut self, text: &str) -> bool {
        !text.trim().is_empty() && !text.starts_with(char::is_whitespace)
    }

    fn on_change(&mut self, event: &ChangeEvent) {
        debug!("language handler: change {:?} via {}", event.new_value, event.method);
        self.events
            .push(format!("onChange {:?} ({})", event.new_value, event.method));
    }

    fn on_suggestion_selected(&mut self, event: &SelectionEvent<Language>) {
        debug!(
            "language handler: selected {:?} via {}",
            event.suggestion_value, event.method
        );
        self.events.push(format!(
            "onSuggestionSelected {} {} ({})",
            event.suggestion_value, event.suggestion.year, event.method
        ));
        self.last_selected = Some(event.suggestion.clone());
    }
}

#[cfg(test)]
#[path = "language_handler_tests.rs"]
mod language_handler_tests;
