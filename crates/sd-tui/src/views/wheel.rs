//! The wheel itself: coloured slices, labels, and the fixed top pointer.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders};

use sd_core::WheelModel;

use crate::shared::to_color;

const LABEL_RADIUS: f64 = 0.62;
const MAX_LABEL_CHARS: usize = 12;

/// Index of the slice covering wheel angle `angle` (degrees clockwise from
/// the slice-0 start). `ends` holds each slice's cumulative end angle.
fn slice_at(ends: &[f64], angle: f64) -> usize {
    ends.iter()
        .position(|&end| angle < end)
        .unwrap_or(ends.len().saturating_sub(1))
}

fn slice_ends(model: &WheelModel) -> Vec<f64> {
    (0..model.len())
        .filter_map(|i| model.slice_geometry(i))
        .map(|g| g.end())
        .collect()
}

fn short_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let mut s: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        s.push('\u{2026}');
        s
    }
}

/// Draw `model` turned clockwise by `rotation` degrees into `area`.
pub fn draw(frame: &mut Frame, model: &WheelModel, rotation: f64, area: Rect) {
    let block = Block::default()
        .title(" Wheel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 || model.is_empty() {
        return;
    }

    // Terminal cells are about twice as tall as wide; widen x so the wheel stays round.
    let y_extent = 1.15;
    let x_extent = y_extent * f64::from(inner.width) / (f64::from(inner.height) * 2.0);

    let ends = slice_ends(model);
    let mut buckets: Vec<Vec<(f64, f64)>> = vec![Vec::new(); ends.len()];

    let cols = u32::from(inner.width) * 2;
    let rows = u32::from(inner.height) * 4;
    for py in 0..rows {
        let y = y_extent - (f64::from(py) + 0.5) / f64::from(rows) * 2.0 * y_extent;
        for px in 0..cols {
            let x = -x_extent + (f64::from(px) + 0.5) / f64::from(cols) * 2.0 * x_extent;
            if x * x + y * y > 1.0 {
                continue;
            }
            let screen = x.atan2(y).to_degrees();
            let angle = (screen - rotation).rem_euclid(360.0);
            buckets[slice_at(&ends, angle)].push((x, y));
        }
    }

    let labels: Vec<(f64, f64, String, Color)> = model
        .items()
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let g = model.slice_geometry(i)?;
            let theta = (g.center + rotation).to_radians();
            let label = short_label(&item.label);
            let half = label.chars().count() as f64 * x_extent / f64::from(inner.width);
            Some((
                theta.sin() * LABEL_RADIUS - half,
                theta.cos() * LABEL_RADIUS,
                label,
                to_color(item.text_color),
            ))
        })
        .collect();

    let colors: Vec<Color> = model.items().iter().map(|i| to_color(i.color)).collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-y_extent, y_extent])
        .paint(|ctx| {
            for (coords, color) in buckets.iter().zip(&colors) {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: *color,
                });
            }
            ctx.layer();
            for (x, y, label, color) in &labels {
                ctx.print(
                    *x,
                    *y,
                    Span::styled(label.clone(), Style::default().fg(*color).bold()),
                );
            }
            ctx.print(
                0.0,
                y_extent,
                Span::styled("\u{25bc}", Style::default().fg(Color::White).bold()),
            );
        });
    frame.render_widget(canvas, inner);
}
