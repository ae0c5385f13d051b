use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::autosuggest::{Autosuggest, InputProps};
use crate::config::Config;
use crate::languages::LanguageHandler;
use crate::layout::LayoutRegions;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    StatusPane,
}

/// Application state
pub struct App {
    pub autosuggest: Autosuggest<LanguageHandler>,
    pub textarea: TextArea<'static>,
    pub input_props: InputProps,
    pub focus: Focus,
    pub layout_regions: LayoutRegions,
    /// Suggestion row currently under the mouse cursor
    pub hovered: Option<usize>,
    pub should_quit: bool,
}

impl App {
    pub fn new(handler: LanguageHandler, config: &Config) -> Self {
        let autosuggest = Autosuggest::new(handler)
            .with_container_id(config.input.container_id.clone())
            .with_max_suggestions(config.suggestions.max_visible);
        let input_props = config.input.input_props();

        let mut textarea = TextArea::default();
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(input_props.placeholder.clone());
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        let mut app = Self {
            autosuggest,
            textarea,
            input_props,
            focus: Focus::InputField,
            layout_regions: LayoutRegions::default(),
            hovered: None,
            should_quit: false,
        };
        app.autosuggest.focus();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text currently in the input line
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn focus_input(&mut self) {
        if self.focus != Focus::InputField {
            self.focus = Focus::InputField;
            self.autosuggest.focus();
            self.hovered = None;
        }
    }

    pub fn blur_input(&mut self) {
        if self.focus != Focus::StatusPane {
            self.focus = Focus::StatusPane;
            self.autosuggest.blur();
            self.hovered = None;
        }
    }

    /// Forward an edit made in the textarea to the state machine
    pub(super) fn sync_autosuggest(&mut self) {
        if self.query() != self.autosuggest.input_text() {
            let text = self.query().to_string();
            self.autosuggest.input_changed(text);
            self.hovered = None;
        }
    }

    /// Mirror the state machine's input text into the textarea
    pub(super) fn sync_textarea(&mut self) {
        if self.query() == self.autosuggest.input_text() {
            return;
        }
        let text = self.autosuggest.input_text().to_string();
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(&text);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
