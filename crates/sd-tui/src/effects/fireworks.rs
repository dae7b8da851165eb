//! Particle fireworks.

use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::StdRng;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};

use sd_core::palette::SYNTH_PALETTE;

use super::{Bounds, Effect};

const PARTICLES_PER_BURST: usize = 50;
const GRAVITY: f64 = 0.05;
const DRAG: f64 = 0.95;
/// Frames between random bursts (about 800 ms).
const BURST_INTERVAL: u32 = 24;

/// One spark.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position (downwards).
    pub y: f64,
    /// Horizontal velocity per frame.
    pub vx: f64,
    /// Vertical velocity per frame.
    pub vy: f64,
    /// Opacity; the particle dies at zero.
    pub alpha: f64,
    /// Opacity lost per frame.
    pub decay: f64,
    /// Palette colour.
    pub color: (u8, u8, u8),
}

/// Bursts of palette-coloured sparks under gravity and drag.
#[derive(Debug, Default)]
pub struct Fireworks {
    particles: Vec<Particle>,
    bounds: Bounds,
    frames_to_burst: u32,
    running: bool,
}

impl Fireworks {
    /// Create a stopped effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn one burst centred on (`x`, `y`).
    pub fn explode(&mut self, x: f64, y: f64, rng: &mut StdRng) {
        for _ in 0..PARTICLES_PER_BURST {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(2.0..7.0);
            let c = SYNTH_PALETTE[rng.random_range(0..SYNTH_PALETTE.len())];
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                alpha: 1.0,
                decay: rng.random_range(0.015..0.035),
                color: (c.r, c.g, c.b),
            });
        }
    }

    /// Draw the live particles into `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        if !self.running || self.particles.is_empty() {
            return;
        }
        let height = self.bounds.height;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.bounds.width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for p in &self.particles {
                    let dim = |v: u8| (f64::from(v) * p.alpha.clamp(0.2, 1.0)) as u8;
                    let (r, g, b) = p.color;
                    ctx.draw(&Points {
                        coords: &[(p.x, height - p.y)],
                        color: Color::Rgb(dim(r), dim(g), dim(b)),
                    });
                }
            });
        frame.render_widget(canvas, area);
    }
}

impl Effect for Fireworks {
    fn start(&mut self, bounds: Bounds, rng: &mut StdRng) {
        self.particles.clear();
        self.bounds = bounds;
        self.running = true;
        self.frames_to_burst = BURST_INTERVAL;
        self.explode(bounds.width / 2.0, bounds.height / 2.0, rng);
    }

    fn step(&mut self, rng: &mut StdRng) {
        if !self.running {
            return;
        }

        self.frames_to_burst = self.frames_to_burst.saturating_sub(1);
        if self.frames_to_burst == 0 {
            self.frames_to_burst = BURST_INTERVAL;
            let w = self.bounds.width;
            let h = self.bounds.height;
            let x = rng.random_range(0.0..1.0) * w * 0.8 + w * 0.1;
            let y = rng.random_range(0.0..1.0) * h * 0.6 + h * 0.1;
            self.explode(x, y, rng);
        }

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.vx *= DRAG;
            p.vy *= DRAG;
            p.alpha -= p.decay;
        }
        self.particles.retain(|p| p.alpha > 0.0);
    }

    fn stop(&mut self) {
        self.particles.clear();
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
