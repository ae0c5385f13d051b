//! Headless autosuggest state machine with a terminal front end
//!
//! [`Autosuggest`] tracks the input text, the visible suggestions and the
//! focused suggestion. Everything specific to the embedder (filtering,
//! rendering, value projection, notifications) comes in through an
//! [`AutosuggestHandler`]. The `app` module embeds it in a ratatui UI.

pub mod app;
pub mod autosuggest;
pub mod config;
pub mod error;
pub mod languages;
pub mod layout;
pub mod widgets;


pub use autosuggest::{
    Autosuggest, AutosuggestHandler, ChangeEvent, ChangeMethod, InputAttributes, InputProps,
    RenderedSuggestion, SelectionEvent, SelectionMethod, Visibility,
};
pub use error::AutosuggestError;
