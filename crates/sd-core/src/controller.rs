//! Spin state machine.
//!
//! `SpinController` owns everything that changes over a session: the mode,
//! the options text, the current wheel, and the spin state. A spin is
//! resolved the instant it is requested, but the result only becomes visible
//! once the completion deadline passes (`Idle -> Spinning -> Idle`). Requests
//! that arrive mid-spin are dropped.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::WheelConfig;
use crate::defaults::default_options_text;
use crate::error::WheelResult;
use crate::history::History;
use crate::input::parse_options;
use crate::item::{Mode, WheelItem};
use crate::model::WheelModel;
use crate::resolver::{SpinOutcome, resolve_spin};

/// What happened to a spin request.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinRequest {
    /// The wheel was idle; a spin is now in flight.
    Started(SpinOutcome),
    /// A spin was already in flight; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
struct SpinState {
    rotation: f64,
    spinning: bool,
    result: Option<WheelItem>,
    history: History,
}

impl SpinState {
    fn new(history_capacity: usize) -> Self {
        Self {
            rotation: 0.0,
            spinning: false,
            result: None,
            history: History::with_capacity(history_capacity),
        }
    }
}

#[derive(Debug, Clone)]
struct PendingSpin {
    outcome: SpinOutcome,
    started: Instant,
    deadline: Instant,
}

/// Drives a wheel through mode changes, edits, and spins.
pub struct SpinController {
    mode: Mode,
    options_text: String,
    model: WheelModel,
    config: WheelConfig,
    state: SpinState,
    pending: Option<PendingSpin>,
    rng: StdRng,
}

impl SpinController {
    /// Create a controller with the default options in `Student` mode.
    pub fn new(config: WheelConfig) -> WheelResult<Self> {
        Self::with_options(Mode::default(), &default_options_text(), config)
    }

    /// Create a controller for `mode` and one-per-line `options_text`.
    pub fn with_options(mode: Mode, options_text: &str, config: WheelConfig) -> WheelResult<Self> {
        config.validate()?;
        let options = parse_options(options_text);
        let model = WheelModel::build_with(mode, &options, &config)?;
        Ok(Self {
            mode,
            options_text: options_text.to_string(),
            model,
            state: SpinState::new(config.history_capacity),
            pending: None,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        })
    }

    /// The current wheel.
    pub fn model(&self) -> &WheelModel {
        &self.model
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The raw options text as last set.
    pub fn options_text(&self) -> &str {
        &self.options_text
    }

    /// The active configuration.
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Cumulative rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    /// Whether a spin is in flight.
    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    /// The revealed result, if any.
    pub fn result(&self) -> Option<&WheelItem> {
        self.state.result.as_ref()
    }

    /// Recently landed labels.
    pub fn history(&self) -> &History {
        &self.state.history
    }

    /// Time left before the in-flight spin completes.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Fraction of the in-flight spin's duration that has elapsed, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        self.pending.as_ref().map(|p| {
            let total = p.deadline.duration_since(p.started).as_secs_f64();
            let elapsed = now.saturating_duration_since(p.started).as_secs_f64();
            if total <= 0.0 {
                1.0
            } else {
                (elapsed / total).clamp(0.0, 1.0)
            }
        })
    }

    /// Switch modes and rebuild the wheel.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.rebuild();
        }
    }

    /// Switch to the other mode.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    /// Replace the options text and rebuild the wheel.
    pub fn set_options_text(&mut self, text: &str) {
        if self.options_text != text {
            self.options_text = text.to_string();
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let options = parse_options(&self.options_text);
        self.model = WheelModel::assemble(self.mode, &options, &self.config);
    }

    /// Start a spin if the wheel is idle.
    ///
    /// The outcome is resolved and the cumulative rotation committed
    /// immediately; the result is revealed by [`tick`](Self::tick) once the
    /// spin's duration has elapsed.
    pub fn request_spin(&mut self, now: Instant) -> WheelResult<SpinRequest> {
        if self.state.spinning {
            tracing::trace!("spin requested while spinning, ignored");
            return Ok(SpinRequest::Ignored);
        }

        let outcome = resolve_spin(&self.model, self.state.rotation, &self.config, &mut self.rng)?;

        self.state.spinning = true;
        self.state.result = None;
        self.state.rotation = outcome.final_rotation;
        self.pending = Some(PendingSpin {
            outcome: outcome.clone(),
            started: now,
            deadline: now + Duration::from_millis(outcome.duration_ms),
        });

        tracing::info!(
            mode = %self.mode,
            rotation = outcome.final_rotation,
            "spin started"
        );
        Ok(SpinRequest::Started(outcome))
    }

    /// Advance the timer. Returns the landed item when a spin completes.
    pub fn tick(&mut self, now: Instant) -> Option<WheelItem> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due {
            self.complete()
        } else {
            None
        }
    }

    /// Complete the in-flight spin without waiting for its deadline.
    pub fn finish_pending(&mut self) -> Option<WheelItem> {
        self.complete()
    }

    /// Spin and complete at once. Returns `None` if a spin was already in flight.
    pub fn spin_now(&mut self, now: Instant) -> WheelResult<Option<WheelItem>> {
        match self.request_spin(now)? {
            SpinRequest::Started(_) => Ok(self.complete()),
            SpinRequest::Ignored => Ok(None),
        }
    }

    /// Hide the revealed result. History is unaffected.
    pub fn dismiss_result(&mut self) {
        self.state.result = None;
    }

    fn complete(&mut self) -> Option<WheelItem> {
        let pending = self.pending.take()?;
        let landed = pending.outcome.landed;
        self.state.spinning = false;
        self.state.history.push(landed.label.clone());
        self.state.result = Some(landed.clone());
        tracing::info!(label = %landed.label, "spin completed");
        Some(landed)
    }
}
