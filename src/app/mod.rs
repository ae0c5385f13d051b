mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_hover;

// Re-export public types
pub use app_render::status_lines;
pub use app_state::{App, Focus};
