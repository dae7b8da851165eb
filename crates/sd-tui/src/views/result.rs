//! Result overlay shown once a spin has landed.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use sd_core::WheelItem;

use crate::shared::{centered_rect, to_color};

/// Headline above the landed label.
pub const HEADLINE: &str = "OPTIMAL PATH SELECTED";

/// Draw the overlay for `item` centred in `area`.
pub fn draw(frame: &mut Frame, item: &WheelItem, area: Rect) {
    let popup = centered_rect(60, 40, area);

    let text = vec![
        Line::from(""),
        Line::from(HEADLINE).style(Style::default().fg(Color::Cyan).bold()),
        Line::from(""),
        Line::from(Span::styled(
            item.label.clone(),
            Style::default().fg(to_color(item.color)).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[a] Accept Fate",
            Style::default().fg(Color::Black).bg(Color::Magenta),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
