//! Shared utilities for TUI views: layout helpers, colours, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use sd_core::Rgb;

/// Convert a palette colour to a terminal colour.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Wheel:"),
        Line::from("  Space / Enter  Spin"),
        Line::from("  m              Switch mode (student / worker)"),
        Line::from("  e              Edit casual options"),
        Line::from(""),
        Line::from("Editing:"),
        Line::from("  Enter          New line"),
        Line::from("  \u{2190} / \u{2192}          Move cursor"),
        Line::from("  Home / End     Jump to start / end of line"),
        Line::from("  Esc            Done editing"),
        Line::from(""),
        Line::from("Result:"),
        Line::from("  a / Enter      Accept"),
        Line::from(""),
        Line::from("  ?              Toggle this help"),
        Line::from("  q / Ctrl+C     Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
