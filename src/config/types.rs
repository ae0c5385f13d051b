// Configuration type definitions

use serde::Deserialize;

use crate::autosuggest::{DEFAULT_CONTAINER_ID, DEFAULT_MAX_SUGGESTIONS, InputProps};

/// How typed text is matched against suggestion names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Prefix,
    Fuzzy,
}

/// Input element section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub id: String,
    pub placeholder: String,
    pub input_type: String,
    pub container_id: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        let props = InputProps::default();
        InputConfig {
            id: props.id,
            placeholder: props.placeholder,
            input_type: props.input_type,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl InputConfig {
    pub fn input_props(&self) -> InputProps {
        InputProps {
            id: self.id.clone(),
            placeholder: self.placeholder.clone(),
            input_type: self.input_type.clone(),
        }
    }
}

/// Suggestion list section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    pub max_visible: usize,
    pub match_mode: MatchMode,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            max_visible: DEFAULT_MAX_SUGGESTIONS,
            match_mode: MatchMode::Prefix,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}
