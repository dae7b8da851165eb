//! Celebration effects shown while a result is on screen.
//!
//! Each effect owns all of its state and has an explicit lifecycle:
//! `start` seeds it, `step` advances one frame, `stop` clears it. Nothing
//! survives a `stop`, so one spin's particles never leak into the next.

pub mod bouncing_text;
pub mod fireworks;

use std::time::Duration;

use rand::rngs::StdRng;

pub use bouncing_text::BouncingText;
pub use fireworks::Fireworks;

/// Effects advance in fixed steps of this length.
pub const FRAME: Duration = Duration::from_millis(33);

/// The virtual space effects are simulated in, with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Width in virtual units.
    pub width: f64,
    /// Height in virtual units.
    pub height: f64,
    /// Width of one terminal cell in virtual units.
    pub cell_width: f64,
    /// Height of one terminal cell in virtual units.
    pub cell_height: f64,
}

impl Bounds {
    /// Virtual width every effect is simulated at.
    pub const VIRTUAL_WIDTH: f64 = 800.0;
    /// Virtual height every effect is simulated at.
    pub const VIRTUAL_HEIGHT: f64 = 450.0;

    /// Bounds for a terminal area of `cols` x `rows` cells.
    pub fn for_cells(cols: u16, rows: u16) -> Self {
        let cols = f64::from(cols.max(1));
        let rows = f64::from(rows.max(1));
        Self {
            width: Self::VIRTUAL_WIDTH,
            height: Self::VIRTUAL_HEIGHT,
            cell_width: Self::VIRTUAL_WIDTH / cols,
            cell_height: Self::VIRTUAL_HEIGHT / rows,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::for_cells(80, 24)
    }
}

/// A self-contained animated effect.
pub trait Effect {
    /// Begin (or restart) the effect inside `bounds`.
    fn start(&mut self, bounds: Bounds, rng: &mut StdRng);

    /// Advance one frame.
    fn step(&mut self, rng: &mut StdRng);

    /// End the effect and drop all of its state.
    fn stop(&mut self);

    /// Whether the effect is running.
    fn is_running(&self) -> bool;
}

/// Converts wall-clock time into whole effect frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    carry: Duration,
}

impl FrameClock {
    /// Add elapsed time; returns how many frames are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;
        let mut frames = 0;
        while self.carry >= FRAME {
            self.carry -= FRAME;
            frames += 1;
        }
        frames
    }

    /// Forget any partial frame.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

/// Convert HSL (hue in degrees, saturation and lightness in `[0, 1]`) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}
