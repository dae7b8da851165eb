//! View rendering for the decider screen.

pub mod controls;
pub mod result;
pub mod wheel;

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{InputMode, TuiApp};
use crate::shared::draw_help_popup;

/// Draw the whole screen at `now`.
pub fn draw(frame: &mut Frame, app: &mut TuiApp, now: Instant) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(rows[0]);

    controls::draw(frame, app, columns[0]);
    wheel::draw(
        frame,
        app.controller.model(),
        app.display_rotation(now),
        columns[1],
    );

    let effects_area = columns[1];
    app.resize_effects(effects_area.width, effects_area.height);
    app.fireworks.draw(frame, effects_area);
    app.banner.draw(frame, effects_area);

    if let Some(item) = app.controller.result() {
        result::draw(frame, item, columns[1]);
    }

    let status = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, rows[1]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn status_line(app: &TuiApp) -> String {
    if let Some(msg) = &app.status {
        return msg.clone();
    }
    match app.input_mode {
        InputMode::Edit => " Editing options | Esc: done".to_string(),
        InputMode::Nav if app.controller.is_spinning() => " Spinning...".to_string(),
        InputMode::Nav if app.controller.result().is_some() => {
            " a/Enter: accept | Space: spin again | ?: help | q: quit".to_string()
        }
        InputMode::Nav => " Space: spin | m: mode | e: edit | ?: help | q: quit".to_string(),
    }
}
