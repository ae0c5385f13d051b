use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AutosuggestError;

/// A programming language and the year it first appeared
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    pub name: String,
    pub year: u16,
}

impl Language {
    pub fn new(name: impl Into<String>, year: u16) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year)
    }
}

const BUILTIN: &[(&str, u16)] = &[
    ("C", 1972),
    ("C#", 2000),
    ("C++", 1983),
    ("Clojure", 2007),
    ("Elm", 2012),
    ("Go", 2009),
    ("Haskell", 1990),
    ("Java", 1995),
    ("Javascript", 1995),
    ("Perl", 1987),
    ("PHP", 1995),
    ("Python", 1991),
    ("Ruby", 1995),
    ("Scala", 2003),
];

pub fn builtin_languages() -> Vec<Language> {
    BUILTIN
        .iter()
        .map(|(name, year)| Language::new(*name, *year))
        .collect()
}

/// Load languages from a JSON array of `{"name": .., "year": ..}` objects
pub fn load_languages_from_path(path: &Path) -> Result<Vec<Language>, AutosuggestError> {
    let contents = fs::read_to_string(path)?;
    parse_languages_json(&contents)
}

pub fn parse_languages_json(content: &str) -> Result<Vec<Language>, AutosuggestError> {
    serde_json::from_str(content).map_err(|e| AutosuggestError::InvalidData(e.to_string()))
}

#[cfg(test)]
#[path = "language_data_tests.rs"]
mod language_data_tests;
