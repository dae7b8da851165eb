//! Left panel: mode switch, options editor, session line, and history.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use sd_core::Mode;

use crate::app::{InputMode, TuiApp};

/// Draw the control panel.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let history_rows = app.controller.history().capacity() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Mode
            Constraint::Min(5),               // Options
            Constraint::Length(3),            // Session
            Constraint::Length(history_rows), // History
        ])
        .split(area);

    draw_mode(frame, app, chunks[0]);
    draw_options(frame, app, chunks[1]);
    draw_session(frame, app, chunks[2]);
    draw_history(frame, app, chunks[3]);
}

fn draw_mode(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let current = app.controller.mode();
    let mut spans = Vec::new();
    for (i, mode) in Mode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *mode == current {
            Style::default().fg(Color::Black).bg(Color::Magenta).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {mode} "), style));
    }

    let block = Block::default()
        .title(" Mode [m] ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_options(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let editing = app.input_mode == InputMode::Edit;
    let (title, border) = if editing {
        (" Options (Esc to finish) ", Color::Yellow)
    } else {
        (" Options [e] ", Color::Magenta)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let (line, col) = app.editor.cursor_line_col();
    let scroll = (line as u16).saturating_sub(inner.height.saturating_sub(1));

    let text: Vec<Line> = app.editor.text().lines().map(Line::from).collect();
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    if editing {
        let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (line as u16).saturating_sub(scroll);
        frame.set_cursor_position((x, y));
    }
}

fn draw_session(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let line = match app.controller.history().latest() {
        Some(label) => Line::from(vec![
            Span::styled("Last: ", Style::default().fg(Color::DarkGray)),
            Span::styled(label.to_string(), Style::default().fg(Color::Cyan).bold()),
        ]),
        None => Line::from(Span::styled(
            "No spins yet",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let block = Block::default()
        .title(" Session ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_history(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let items: Vec<ListItem> = app
        .controller
        .history()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == 0 {
                Style::default().fg(Color::White).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format!("{:>2}. {label}", i + 1)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(list, area);
}
