//! Mouse click handling
//!
//! Clicking a suggestion commits it; clicking the input focuses it and
//! clicking anywhere else blurs it.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::autosuggest::autosuggest_render::suggestion_at;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => click_suggestion(app, mouse),
        Some(Region::InputField) => app.focus_input(),
        Some(Region::StatusPane) | None => app.blur_input(),
    }
}

fn click_suggestion(app: &mut App, mouse: MouseEvent) {
    let Some(area) = app.layout_regions.suggestions else {
        return;
    };
    let count = app.autosuggest.suggestions().len();

    // Border rows of the popup are inert
    if let Some(index) = suggestion_at(area, count, mouse.column, mouse.row) {
        app.autosuggest.click(index);
        app.hovered = None;
        app.sync_textarea();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
