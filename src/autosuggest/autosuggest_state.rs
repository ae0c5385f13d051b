//! Visibility and focus state machine
//!
//! `Autosuggest` owns the input text, the current suggestion list and the
//! focus index. Embedders drive it with one method per user interaction
//! (typing, Up/Down, Enter, Escape, mouse enter/leave/click, focus/blur)
//! and read back what to display.

use log::debug;

use super::aria::suggestion_id;
use super::handler::{
    AutosuggestHandler, ChangeEvent, ChangeMethod, SelectionEvent, SelectionMethod,
};

/// Default identifier of the suggestions container
pub const DEFAULT_CONTAINER_ID: &str = "autosuggest-suggestions-1";

/// Upper bound on how many suggestions a single filter pass keeps
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Whether suggestions are shown, and which one is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown { focused: Option<usize> },
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown { .. })
    }

    pub fn focused(&self) -> Option<usize> {
        match self {
            Visibility::Shown { focused } => *focused,
            Visibility::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// One suggestion as produced by a render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSuggestion<R> {
    pub index: usize,
    pub id: String,
    pub focused: bool,
    pub content: R,
}

/// Autosuggest widget core
pub struct Autosuggest<H: AutosuggestHandler> {
    handler: H,
    input_text: String,
    suggestions: Vec<H::Suggestion>,
    visibility: Visibility,
    /// Text typed before Up/Down started previewing suggestions
    value_before_preview: Option<String>,
    container_id: String,
    max_suggestions: usize,
}

impl<H: AutosuggestHandler> Autosuggest<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            input_text: String::new(),
            suggestions: Vec::new(),
            visibility: Visibility::Hidden,
            value_before_preview: None,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    /// Limit the number of suggestions kept per filter pass (minimum 1)
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions.max(1);
        self
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.is_shown()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.visibility.focused()
    }

    pub fn focused_suggestion(&self) -> Option<&H::Suggestion> {
        self.focused_index().and_then(|i| self.suggestions.get(i))
    }

    /// Suggestions currently on display (empty while hidden)
    pub fn suggestions(&self) -> &[H::Suggestion] {
        &self.suggestions
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn value_before_preview(&self) -> Option<&str> {
        self.value_before_preview.as_deref()
    }

    /// The user edited the input
    pub fn input_changed(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!("autosuggest: input changed to {:?}", text);

        self.value_before_preview = None;
        self.replace_input_text(text, ChangeMethod::Type);
        self.refresh();
    }

    /// The input regained focus
    pub fn focus(&mut self) {
        debug!("autosuggest: focus");
        self.value_before_preview = None;
        self.refresh();
    }

    /// The input lost focus
    pub fn blur(&mut self) {
        debug!("autosuggest: blur");
        self.hide();
    }

    pub fn key_down(&mut self) {
        self.navigate(Direction::Down);
    }

    pub fn key_up(&mut self) {
        self.navigate(Direction::Up);
    }

    /// Escape hides visible suggestions, undoing any keyboard preview.
    /// With suggestions already hidden it clears the input.
    pub fn escape(&mut self) {
        match self.visibility {
            Visibility::Shown { .. } => {
                debug!("autosuggest: escape hides suggestions");
                self.hide();
                if let Some(previous) = self.value_before_preview.take() {
                    self.replace_input_text(previous, ChangeMethod::Escape);
                }
            }
            Visibility::Hidden => {
                debug!("autosuggest: escape clears input");
                self.value_before_preview = None;
                self.replace_input_text(String::new(), ChangeMethod::Escape);
            }
        }
        self.check_invariants();
    }

    /// Commit the focused suggestion, if any
    pub fn enter(&mut self) {
        if let Some(index) = self.focused_index() {
            self.commit(index, SelectionMethod::Enter);
        }
    }

    pub fn mouse_enter(&mut self, index: usize) {
        if self.is_shown() && index < self.suggestions.len() {
            self.visibility = Visibility::Shown {
                focused: Some(index),
            };
        }
        self.check_invariants();
    }

    pub fn mouse_leave(&mut self, index: usize) {
        if self.focused_index() == Some(index) {
            self.visibility = Visibility::Shown { focused: None };
        }
        self.check_invariants();
    }

    pub fn click(&mut self, index: usize) {
        if !self.is_shown() || index >= self.suggestions.len() {
            debug!("autosuggest: click on missing suggestion {}", index);
            return;
        }
        self.commit(index, SelectionMethod::Click);
    }

    /// Run the renderer once per visible suggestion
    pub fn render(&mut self) -> Vec<RenderedSuggestion<H::Rendered>> {
        let focused = self.focused_index();
        let previous = self.value_before_preview.as_deref();
        let mut rendered = Vec::with_capacity(self.suggestions.len());

        for (index, suggestion) in self.suggestions.iter().enumerate() {
            let content = self
                .handler
                .render_suggestion(suggestion, &self.input_text, previous);
            rendered.push(RenderedSuggestion {
                index,
                id: suggestion_id(&self.container_id, index),
                focused: focused == Some(index),
                content,
            });
        }

        rendered
    }

    fn navigate(&mut self, direction: Direction) {
        let Visibility::Shown { focused } = self.visibility else {
            // First press only reveals the list
            self.refresh();
            return;
        };

        let count = self.suggestions.len();
        let next = match (direction, focused) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(i)) if i + 1 < count => Some(i + 1),
            (Direction::Down, Some(_)) => None,
            (Direction::Up, None) => count.checked_sub(1),
            (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(i)) => Some(i - 1),
        };
        debug!("autosuggest: {:?} moves focus {:?} -> {:?}", direction, focused, next);

        if self.value_before_preview.is_none() {
            self.value_before_preview = Some(self.input_text.clone());
        }

        let new_value = match next {
            Some(index) => self.handler.suggestion_value(&self.suggestions[index]),
            None => self.value_before_preview.clone().unwrap_or_default(),
        };

        self.visibility = Visibility::Shown { focused: next };
        let method = match direction {
            Direction::Up => ChangeMethod::Up,
            Direction::Down => ChangeMethod::Down,
        };
        self.replace_input_text(new_value, method);
        self.check_invariants();
    }

    fn commit(&mut self, index: usize, method: SelectionMethod) {
        let suggestion = self.suggestions[index].clone();
        let suggestion_value = self.handler.suggestion_value(&suggestion);
        debug!("autosuggest: commit {:?} via {}", suggestion_value, method);

        let change_method = match method {
            SelectionMethod::Enter => ChangeMethod::Enter,
            SelectionMethod::Click => ChangeMethod::Click,
        };
        self.replace_input_text(suggestion_value.clone(), change_method);
        self.value_before_preview = None;
        self.hide();

        self.handler.on_suggestion_selected(&SelectionEvent {
            suggestion,
            suggestion_value,
            method,
        });
    }

    /// Recompute suggestions for the current text and show them unfocused
    fn refresh(&mut self) {
        self.suggestions = if self.handler.should_render_suggestions(&self.input_text) {
            let mut suggestions = self.handler.suggestions(&self.input_text);
            suggestions.truncate(self.max_suggestions);
            suggestions
        } else {
            Vec::new()
        };

        self.visibility = if self.suggestions.is_empty() {
            Visibility::Hidden
        } else {
            Visibility::Shown { focused: None }
        };
        debug!(
            "autosuggest: {} suggestions for {:?}",
            self.suggestions.len(),
            self.input_text
        );
        self.check_invariants();
    }

    fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
        self.suggestions.clear();
    }

    /// Set the input text, notifying only when it actually changes
    fn replace_input_text(&mut self, text: String, method: ChangeMethod) {
        if text == self.input_text {
            return;
        }
        self.input_text = text;
        self.handler.on_change(&ChangeEvent {
            new_value: self.input_text.clone(),
            method,
        });
    }

    fn check_invariants(&self) {
        match self.visibility {
            Visibility::Hidden => debug_assert!(self.suggestions.is_empty()),
            Visibility::Shown { focused } => {
                debug_assert!(!self.suggestions.is_empty());
                if let Some(index) = focused {
                    debug_assert!(index < self.suggestions.len());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "autosuggest_state_tests.rs"]
mod autosuggest_state_tests;
