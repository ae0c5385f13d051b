//! Accessibility attributes for the combobox pattern
//!
//! The input acts as a `combobox` that owns a `listbox` of `option`s.

use std::fmt;

use super::autosuggest_state::Autosuggest;
use super::handler::AutosuggestHandler;

pub const COMBOBOX_ROLE: &str = "combobox";
pub const LISTBOX_ROLE: &str = "listbox";
pub const OPTION_ROLE: &str = "option";
pub const AUTOCOMPLETE_LIST: &str = "list";

/// Identifier of the suggestion at `index` inside `container_id`
pub fn suggestion_id(container_id: &str, index: usize) -> String {
    format!("{}--item-{}", container_id, index)
}

/// Static properties of the input element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    pub id: String,
    pub placeholder: String,
    pub input_type: String,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            id: "my-awesome-autosuggest".to_string(),
            placeholder: "Type a programming language".to_string(),
            input_type: "search".to_string(),
        }
    }
}

/// Full attribute set of the input for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAttributes {
    pub id: String,
    pub placeholder: String,
    pub input_type: String,
    pub value: String,
    pub role: &'static str,
    pub aria_autocomplete: &'static str,
    pub aria_expanded: bool,
    pub aria_owns: String,
    pub aria_activedescendant: Option<String>,
}

impl InputAttributes {
    /// Attribute name/value pairs in document order; absent ones are skipped
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("id", self.id.clone()),
            ("type", self.input_type.clone()),
            ("placeholder", self.placeholder.clone()),
            ("value", self.value.clone()),
            ("role", self.role.to_string()),
            ("aria-autocomplete", self.aria_autocomplete.to_string()),
            ("aria-expanded", self.aria_expanded.to_string()),
            ("aria-owns", self.aria_owns.clone()),
        ];
        if let Some(active) = &self.aria_activedescendant {
            pairs.push(("aria-activedescendant", active.clone()));
        }
        pairs
    }

    /// Look up a single attribute by name
    pub fn get(&self, name: &str) -> Option<String> {
        self.pairs()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl fmt::Display for InputAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .pairs()
            .into_iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, value))
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}

impl<H: AutosuggestHandler> Autosuggest<H> {
    /// Attributes the input element should carry right now
    pub fn input_attributes(&self, props: &InputProps) -> InputAttributes {
        InputAttributes {
            id: props.id.clone(),
            placeholder: props.placeholder.clone(),
            input_type: props.input_type.clone(),
            value: self.input_text().to_string(),
            role: COMBOBOX_ROLE,
            aria_autocomplete: AUTOCOMPLETE_LIST,
            aria_expanded: self.is_shown(),
            aria_owns: self.container_id().to_string(),
            aria_activedescendant: self
                .focused_index()
                .map(|index| suggestion_id(self.container_id(), index)),
        }
    }
}

#[cfg(test)]
#[path = "aria_tests.rs"]
mod aria_tests;
