//! Programming-language suggestion source
//!
//! Supplies the demo application's suggestions: a list of languages, a
//! matcher that filters them for the typed text and the handler that
//! plugs both into the autosuggest state machine.

mod language_data;
mod language_handler;
mod matcher;

pub use language_data::{Language, builtin_languages, load_languages_from_path, parse_languages_json};
pub use language_handler::{EventLog, LanguageHandler, highlight_line};
pub use matcher::LanguageMatcher;
