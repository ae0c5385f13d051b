use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Focus};
use crate::autosuggest::{LISTBOX_ROLE, OPTION_ROLE, autosuggest_render};

const INPUT_HEIGHT: u16 = 3;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Input on top, status below; the popup drops over the status pane
        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(3),
        ])
        .split(frame.area());

        let input_area = layout[0];
        let status_area = layout[1];

        self.layout_regions.clear();

        self.render_input_field(frame, input_area);
        self.render_status_pane(frame, status_area);

        let rendered = self.autosuggest.render();
        self.layout_regions.input_field = Some(input_area);
        self.layout_regions.status_pane = Some(status_area);
        self.layout_regions.suggestions =
            autosuggest_render::render_popup(frame, input_area, rendered);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::InputField {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.input_props.id))
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
    }

    fn render_status_pane(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::StatusPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Accessibility & Events ")
            .border_style(Style::default().fg(border_color));

        let content = Paragraph::new(status_lines(self)).block(block);
        frame.render_widget(content, area);
    }
}

/// Lines describing the input's attributes, the listbox and recent callbacks
pub fn status_lines(app: &App) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan);

    let mut lines = vec![Line::from(Span::styled("input", heading))];

    let attributes = app.autosuggest.input_attributes(&app.input_props);
    for (name, value) in attributes.pairs() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", name), key_style),
            Span::raw(format!("=\"{}\"", value)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(LISTBOX_ROLE, heading),
        Span::raw(format!(
            " id=\"{}\" {} {}",
            app.autosuggest.container_id(),
            app.autosuggest.suggestions().len(),
            OPTION_ROLE
        )),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("events", heading)));
    let events = app.autosuggest.handler().events();
    if events.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none yet)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for entry in events.entries() {
            lines.push(Line::from(format!("  {}", entry)));
        }
    }

    lines
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
