//! A congratulation banner that flips in, then bounces around the screen.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::StdRng;
use ratatui::prelude::*;
use ratatui::widgets::canvas::Canvas;

use super::{Bounds, Effect, hsl_to_rgb};

/// Default banner text.
pub const BANNER: &str = "CONGRATULATIONS!";

const SPEED: f64 = 4.0;
const FLIP_STEP: f64 = 4.0;
const HUE_STEP: f64 = 5.0;
const MIN_SCALE: f64 = 0.5;
const SHRINK_STEP: f64 = 0.002;
const TRAIL_LEN: usize = 30;

/// Which part of the animation is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Flipping in place at the centre.
    Intro,
    /// Bouncing off the edges.
    Moving,
}

/// A previous position, kept for the fading trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// Horizontal centre.
    pub x: f64,
    /// Vertical centre (downwards).
    pub y: f64,
    /// Hue at the time.
    pub hue: f64,
    /// Scale at the time.
    pub scale: f64,
}

/// The bouncing banner.
#[derive(Debug)]
pub struct BouncingText {
    text: String,
    phase: Phase,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    flip: f64,
    hue: f64,
    scale: f64,
    trail: VecDeque<TrailPoint>,
    bounds: Bounds,
    running: bool,
}

impl Default for BouncingText {
    fn default() -> Self {
        Self::new(BANNER)
    }
}

impl BouncingText {
    /// Create a stopped banner showing `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            phase: Phase::Intro,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            flip: 0.0,
            hue: 0.0,
            scale: 1.0,
            trail: VecDeque::new(),
            bounds: Bounds::default(),
            running: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current centre position.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Current scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Trail points, oldest first.
    pub fn trail(&self) -> &VecDeque<TrailPoint> {
        &self.trail
    }

    /// Vertical squash of the intro flip, in `[-1, 1]`.
    pub fn flip_factor(&self) -> f64 {
        self.flip.to_radians().cos()
    }

    fn extent(&self) -> (f64, f64) {
        let chars = self.text.chars().count() as f64;
        (
            chars * self.bounds.cell_width * self.scale,
            self.bounds.cell_height * self.scale,
        )
    }

    fn bounce(&mut self) {
        let (w, h) = self.extent();
        let max_x = self.bounds.width;
        let max_y = self.bounds.height;

        if self.x + w / 2.0 > max_x {
            self.x = max_x - w / 2.0;
            self.vx = -self.vx;
        } else if self.x - w / 2.0 < 0.0 {
            self.x = w / 2.0;
            self.vx = -self.vx;
        }

        if self.y + h / 2.0 > max_y {
            self.y = max_y - h / 2.0;
            self.vy = -self.vy;
        } else if self.y - h / 2.0 < 0.0 {
            self.y = h / 2.0;
            self.vy = -self.vy;
        }
    }

    /// Draw the banner and its trail into `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        if !self.running {
            return;
        }
        if self.phase == Phase::Intro && self.flip_factor().abs() < 0.3 {
            return;
        }

        let height = self.bounds.height;
        let half_width = self.text.chars().count() as f64 * self.bounds.cell_width / 2.0;
        let len = self.trail.len().max(1) as f64;

        let canvas = Canvas::default()
            .x_bounds([0.0, self.bounds.width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for (i, point) in self.trail.iter().enumerate() {
                    let fade = i as f64 / len * 0.4;
                    let (r, g, b) = hsl_to_rgb(point.hue, 1.0, 0.6 * fade);
                    ctx.print(
                        point.x,
                        height - point.y,
                        Span::styled("\u{b7}", Style::default().fg(Color::Rgb(r, g, b))),
                    );
                }
                let (r, g, b) = hsl_to_rgb(self.hue, 1.0, 0.6);
                ctx.print(
                    self.x - half_width,
                    height - self.y,
                    Span::styled(
                        self.text.clone(),
                        Style::default().fg(Color::Rgb(r, g, b)).bold(),
                    ),
                );
            });
        frame.render_widget(canvas, area);
    }
}

impl Effect for BouncingText {
    fn start(&mut self, bounds: Bounds, rng: &mut StdRng) {
        let angle = rng.random_range(0.0..TAU);
        self.bounds = bounds;
        self.phase = Phase::Intro;
        self.x = bounds.width / 2.0;
        self.y = bounds.height / 2.0;
        self.vx = angle.cos() * SPEED;
        self.vy = angle.sin() * SPEED;
        self.flip = 0.0;
        self.hue = 0.0;
        self.scale = 1.0;
        self.trail.clear();
        self.running = true;
    }

    fn step(&mut self, _rng: &mut StdRng) {
        if !self.running {
            return;
        }
        self.hue = (self.hue + HUE_STEP) % 360.0;

        match self.phase {
            Phase::Intro => {
                self.flip += FLIP_STEP;
                if self.flip >= 360.0 {
                    self.phase = Phase::Moving;
                    self.flip = 0.0;
                    self.scale = 1.0;
                }
            }
            Phase::Moving => {
                if self.scale > MIN_SCALE {
                    self.scale = (self.scale - SHRINK_STEP).max(MIN_SCALE);
                }
                self.x += self.vx;
                self.y += self.vy;
                self.bounce();

                self.trail.push_back(TrailPoint {
                    x: self.x,
                    y: self.y,
                    hue: self.hue,
                    scale: self.scale,
                });
                if self.trail.len() > TRAIL_LEN {
                    self.trail.pop_front();
                }
            }
        }
    }

    fn stop(&mut self) {
        self.running = false;
        self.trail.clear();
        self.phase = Phase::Intro;
        self.flip = 0.0;
        self.scale = 1.0;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn started(seed: u64) -> (BouncingText, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut text = BouncingText::default();
        text.start(Bounds::default(), &mut rng);
        (text, rng)
    }

    #[test]
    fn intro_lasts_ninety_frames() {
        let (mut text, mut rng) = started(1);
        assert_eq!(text.phase(), Phase::Intro);
        for _ in 0..89 {
            text.step(&mut rng);
        }
        assert_eq!(text.phase(), Phase::Intro);
        assert_eq!(text.position(), (400.0, 225.0));
        text.step(&mut rng);
        assert_eq!(text.phase(), Phase::Moving);
    }

    #[test]
    fn stays_inside_bounds_and_shrinks() {
        let (mut text, mut rng) = started(2);
        for _ in 0..2000 {
            text.step(&mut rng);
            let (x, y) = text.position();
            assert!((0.0..=800.0).contains(&x));
            assert!((0.0..=450.0).contains(&y));
        }
        assert_eq!(text.scale(), MIN_SCALE);
    }

    #[test]
    fn trail_is_bounded() {
        let (mut text, mut rng) = started(3);
        for _ in 0..200 {
            text.step(&mut rng);
        }
        assert_eq!(text.trail().len(), TRAIL_LEN);
    }

    #[test]
    fn stop_resets_state() {
        let (mut text, mut rng) = started(4);
        for _ in 0..150 {
            text.step(&mut rng);
        }
        text.stop();
        assert!(!text.is_running());
        assert!(text.trail().is_empty());
        assert_eq!(text.phase(), Phase::Intro);
        text.step(&mut rng);
        assert!(text.trail().is_empty());
    }

    #[test]
    fn restart_recentres() {
        let (mut text, mut rng) = started(5);
        for _ in 0..300 {
            text.step(&mut rng);
        }
        text.start(Bounds::default(), &mut rng);
        assert_eq!(text.position(), (400.0, 225.0));
        assert!(text.trail().is_empty());
    }
}
