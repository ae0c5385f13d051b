use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;

use super::app_state::{App, Focus};
use super::{mouse_click, mouse_hover};
use crate::layout::region_at;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::StatusPane => self.handle_status_pane_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Tab / Shift+Tab: move focus in or out of the input
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            match self.focus {
                Focus::InputField => self.blur_input(),
                Focus::StatusPane => self.focus_input(),
            }
            return true;
        }

        false
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => self.autosuggest.key_down(),
            KeyCode::Up => self.autosuggest.key_up(),
            KeyCode::Enter => self.autosuggest.enter(),
            KeyCode::Esc => self.autosuggest.escape(),
            // Single-line input: never let the textarea open a new line
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                self.textarea.input(key);
                self.sync_autosuggest();
                return;
            }
        }
        if !self.autosuggest.is_shown() {
            self.hovered = None;
        }
        self.sync_textarea();
    }

    fn handle_status_pane_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }

    /// Insert pasted text into the input as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        if self.focus != Focus::InputField {
            return;
        }
        let single_line = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(&single_line);
        self.sync_autosuggest();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
