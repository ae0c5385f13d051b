//! Mouse hover handling
//!
//! Translates cursor movement over the suggestions popup into mouse
//! enter/leave transitions on the autosuggest state machine.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::autosuggest::autosuggest_render::suggestion_at;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    let index = match region {
        Some(Region::Suggestions) => hovered_suggestion(app, mouse),
        _ => None,
    };

    if index == app.hovered {
        return;
    }

    if let Some(previous) = app.hovered.take() {
        app.autosuggest.mouse_leave(previous);
    }
    if let Some(index) = index {
        app.autosuggest.mouse_enter(index);
        app.hovered = Some(index);
    }
}

fn hovered_suggestion(app: &App, mouse: MouseEvent) -> Option<usize> {
    let area = app.layout_regions.suggestions?;
    suggestion_at(
        area,
        app.autosuggest.suggestions().len(),
        mouse.column,
        mouse.row,
    )
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
