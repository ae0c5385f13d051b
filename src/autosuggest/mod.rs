mod aria;
pub mod autosuggest_render;
mod autosuggest_state;
mod handler;

pub use aria::{
    AUTOCOMPLETE_LIST, COMBOBOX_ROLE, InputAttributes, InputProps, LISTBOX_ROLE, OPTION_ROLE,
    suggestion_id,
};
pub use autosuggest_state::{
    Autosuggest, DEFAULT_CONTAINER_ID, DEFAULT_MAX_SUGGESTIONS, RenderedSuggestion, Visibility,
};
pub use handler::{AutosuggestHandler, ChangeEvent, ChangeMethod, SelectionEvent, SelectionMethod};
