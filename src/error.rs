use thiserror::Error;

/// Custom error types for autosuggest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutosuggestError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid suggestion data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AutosuggestError {
    fn from(err: std::io::Error) -> Self {
        AutosuggestError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
