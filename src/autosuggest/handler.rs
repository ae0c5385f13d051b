//! Callback contract between the autosuggest state machine and its embedder
//!
//! The state machine never decides what a suggestion looks like or which
//! suggestions match. Those decisions are injected through
//! [`AutosuggestHandler`], which also receives change and selection
//! notifications.

use std::fmt;

/// How the input text came to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeMethod {
    Type,
    Up,
    Down,
    Escape,
    Click,
    Enter,
}

impl fmt::Display for ChangeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeMethod::Type => "type",
            ChangeMethod::Up => "up",
            ChangeMethod::Down => "down",
            ChangeMethod::Escape => "escape",
            ChangeMethod::Click => "click",
            ChangeMethod::Enter => "enter",
        };
        write!(f, "{}", name)
    }
}

/// How a suggestion was committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    Enter,
    Click,
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMethod::Enter => write!(f, "enter"),
            SelectionMethod::Click => write!(f, "click"),
        }
    }
}

/// Payload of a change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub new_value: String,
    pub method: ChangeMethod,
}

/// Payload of a selection notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent<S> {
    pub suggestion: S,
    pub suggestion_value: String,
    pub method: SelectionMethod,
}

/// Capabilities supplied by whoever embeds an [`Autosuggest`](super::Autosuggest)
///
/// Every method takes `&mut self` so implementations can record calls or
/// keep caches without interior mutability.
pub trait AutosuggestHandler {
    /// Opaque suggestion record
    type Suggestion: Clone;
    /// Whatever the renderer produces for one suggestion
    type Rendered;

    /// Ordered candidates for `text`. An empty vector hides the list.
    fn suggestions(&mut self, text: &str) -> Vec<Self::Suggestion>;

    /// Project a suggestion onto the string placed into the input
    fn suggestion_value(&mut self, suggestion: &Self::Suggestion) -> String;

    /// Render one suggestion against the current text and the text typed
    /// before a keyboard preview started (if any)
    fn render_suggestion(
        &mut self,
        suggestion: &Self::Suggestion,
        current_text: &str,
        previous_text: Option<&str>,
    ) -> Self::Rendered;

    /// Gate for showing suggestions at all
    fn should_render_suggestions(&mut self, text: &str) -> bool {
        !text.trim().is_empty()
    }

    fn on_change(&mut self, _event: &ChangeEvent) {}

    fn on_suggestion_selected(&mut self, _event: &SelectionEvent<Self::Suggestion>) {}
}
