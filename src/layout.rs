//! Layout region tracking for mouse interactions
//!
//! `LayoutRegions` records where components were drawn on the last frame
//! and `region_at()` finds the component under a screen position.

use ratatui::layout::Rect;

use crate::widgets::popup;

/// Interactive screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Suggestions,
    StatusPane,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub status_pane: Option<Rect>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Region under (`column`, `row`); the suggestions popup overlays the rest
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let candidates = [
        (regions.suggestions, Region::Suggestions),
        (regions.input_field, Region::InputField),
        (regions.status_pane, Region::StatusPane),
    ];

    candidates
        .into_iter()
        .find(|(area, _)| area.is_some_and(|area| popup::contains(area, column, row)))
        .map(|(_, region)| region)
}
