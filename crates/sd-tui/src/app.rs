//! Top-level application state: the spin controller plus everything that
//! only exists on screen (editor buffer, rotation animation, effects).

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;

use sd_core::{SpinController, SpinRequest};

use crate::animation::SpinAnimation;
use crate::editor::OptionsEditor;
use crate::effects::{BouncingText, Bounds, Effect, Fireworks, FrameClock};

/// How keystrokes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands (spin, mode, edit, quit).
    Nav,
    /// Keystrokes go to the options editor.
    Edit,
}

/// Main application state for the TUI.
pub struct TuiApp {
    /// Session state: mode, wheel, rotation, result, history.
    pub controller: SpinController,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Buffer behind the options panel.
    pub editor: OptionsEditor,
    /// Rotation animation of the in-flight spin.
    pub animation: Option<SpinAnimation>,
    /// Particle fireworks.
    pub fireworks: Fireworks,
    /// Bouncing congratulation banner.
    pub banner: BouncingText,
    /// One-off status bar message (errors).
    pub status: Option<String>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    effect_bounds: Bounds,
    effect_rng: StdRng,
    clock: FrameClock,
    last_update: Option<Instant>,
}

impl TuiApp {
    /// Create an app around a configured controller.
    pub fn new(controller: SpinController) -> Self {
        let editor = OptionsEditor::new(controller.options_text());
        let effect_rng = StdRng::seed_from_u64(controller.config().seed.wrapping_add(1));
        Self {
            controller,
            input_mode: InputMode::Nav,
            editor,
            animation: None,
            fireworks: Fireworks::new(),
            banner: BouncingText::default(),
            status: None,
            show_help: false,
            should_quit: false,
            effect_bounds: Bounds::default(),
            effect_rng,
            clock: FrameClock::default(),
            last_update: None,
        }
    }

    /// The wheel angle to draw at `now`.
    pub fn display_rotation(&self, now: Instant) -> f64 {
        self.animation
            .as_ref()
            .map_or(self.controller.rotation(), |a| a.angle_at(now))
    }

    /// Whether any celebration effect is running.
    pub fn celebrating(&self) -> bool {
        self.fireworks.is_running() || self.banner.is_running()
    }

    /// Remember the size of the area effects are drawn into.
    pub fn resize_effects(&mut self, cols: u16, rows: u16) {
        self.effect_bounds = Bounds::for_cells(cols, rows);
    }

    /// Advance timers: complete a due spin and step the effects.
    pub fn update(&mut self, now: Instant) {
        if let Some(landed) = self.controller.tick(now) {
            self.animation = None;
            tracing::debug!(label = %landed.label, "result revealed");
            self.start_effects();
        }

        let elapsed = self
            .last_update
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_update = Some(now);

        let frames = self.clock.advance(elapsed);
        if self.celebrating() {
            for _ in 0..frames {
                self.fireworks.step(&mut self.effect_rng);
                self.banner.step(&mut self.effect_rng);
            }
        }
    }

    /// Request a spin at `now`.
    pub fn spin(&mut self, now: Instant) {
        let from = self.controller.rotation();
        match self.controller.request_spin(now) {
            Ok(SpinRequest::Started(outcome)) => {
                self.stop_effects();
                self.status = None;
                self.animation = Some(SpinAnimation::new(
                    from,
                    outcome.final_rotation,
                    now,
                    Duration::from_millis(outcome.duration_ms),
                ));
            }
            Ok(SpinRequest::Ignored) => {}
            Err(e) => {
                tracing::warn!(error = %e, "spin failed");
                self.status = Some(format!(" error: {e}"));
            }
        }
    }

    /// Accept the shown result and clear the celebration.
    pub fn accept(&mut self) {
        self.controller.dismiss_result();
        self.stop_effects();
    }

    fn start_effects(&mut self) {
        self.clock.reset();
        self.fireworks.start(self.effect_bounds, &mut self.effect_rng);
        self.banner.start(self.effect_bounds, &mut self.effect_rng);
    }

    fn stop_effects(&mut self) {
        self.fireworks.stop();
        self.banner.stop();
    }

    /// Handle one key press at `now`.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Nav => self.handle_nav_key(key, now),
            InputMode::Edit => self.handle_edit_key(key),
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent, now: Instant) {
        let has_result = self.controller.result().is_some();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('m') => self.controller.toggle_mode(),
            KeyCode::Char('e') => self.input_mode = InputMode::Edit,
            KeyCode::Char(' ') => self.spin(now),
            KeyCode::Char('a') if has_result => self.accept(),
            KeyCode::Enter if has_result => self.accept(),
            KeyCode::Enter => self.spin(now),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Nav;
                return;
            }
            KeyCode::Enter => self.editor.newline(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Left => self.editor.left(),
            KeyCode::Right => self.editor.right(),
            KeyCode::Home => self.editor.home(),
            KeyCode::End => self.editor.end(),
            KeyCode::Char(c) => self.editor.insert(c),
            _ => return,
        }
        self.controller.set_options_text(self.editor.text());
    }
}
