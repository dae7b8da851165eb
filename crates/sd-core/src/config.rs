//! Tuning parameters for the wheel and its spins.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult, read_file};
use crate::model::{RIGGED_INDICES, SLICE_COUNT};

/// Configuration shared by the model builder, resolver, and controller.
///
/// Weights, jitter, and turn counts are presentation tuning: they change how
/// the wheel looks and how long it appears to revolve, never which slice
/// it lands on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Weight of the two obligation slices.
    pub thin_weight: f64,
    /// Weight of every casual slice.
    pub normal_weight: f64,
    /// Jitter bound as a fraction of the landed slice's width.
    pub jitter_fraction: f64,
    /// Fewest cosmetic full turns added to a spin.
    pub min_extra_turns: u32,
    /// Most cosmetic full turns added to a spin.
    pub max_extra_turns: u32,
    /// Length of the spin animation in milliseconds.
    pub duration_ms: u64,
    /// Number of results kept in history.
    pub history_capacity: usize,
    /// RNG seed for the controller.
    pub seed: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            thin_weight: 0.2,
            normal_weight: 1.0,
            jitter_fraction: 0.1,
            min_extra_turns: 8,
            max_extra_turns: 11,
            duration_ms: 6000,
            history_capacity: 8,
            seed: 42,
        }
    }
}

impl WheelConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the obligation and casual slice weights.
    pub fn with_weights(mut self, thin: f64, normal: f64) -> Self {
        self.thin_weight = thin;
        self.normal_weight = normal;
        self
    }

    /// Set the range of cosmetic extra turns.
    pub fn with_extra_turns(mut self, min: u32, max: u32) -> Self {
        self.min_extra_turns = min;
        self.max_extra_turns = max;
        self
    }

    /// Set the jitter bound as a fraction of slice width.
    pub fn with_jitter_fraction(mut self, fraction: f64) -> Self {
        self.jitter_fraction = fraction;
        self
    }

    /// Set the spin duration in milliseconds.
    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Check that every parameter keeps the wheel's invariants intact.
    pub fn validate(&self) -> WheelResult<()> {
        if !self.thin_weight.is_finite() || !self.normal_weight.is_finite() {
            return Err(WheelError::InvalidConfig(
                "weights must be finite".to_string(),
            ));
        }
        if self.thin_weight <= 0.0 {
            return Err(WheelError::InvalidConfig(format!(
                "thin_weight must be positive, got {}",
                self.thin_weight
            )));
        }
        if self.thin_weight >= self.normal_weight {
            return Err(WheelError::InvalidConfig(format!(
                "thin_weight ({}) must be smaller than normal_weight ({})",
                self.thin_weight, self.normal_weight
            )));
        }
        let rigged = RIGGED_INDICES.len() as f64;
        let casual = (SLICE_COUNT - RIGGED_INDICES.len()) as f64;
        let total = self.thin_weight * rigged + self.normal_weight * casual;
        if !total.is_finite() {
            return Err(WheelError::InvalidConfig(format!(
                "weights sum to {total} over {SLICE_COUNT} slices"
            )));
        }
        if !(0.0..0.5).contains(&self.jitter_fraction) {
            return Err(WheelError::InvalidConfig(format!(
                "jitter_fraction must be in [0, 0.5), got {}",
                self.jitter_fraction
            )));
        }
        if self.min_extra_turns > self.max_extra_turns {
            return Err(WheelError::InvalidConfig(format!(
                "min_extra_turns ({}) exceeds max_extra_turns ({})",
                self.min_extra_turns, self.max_extra_turns
            )));
        }
        if self.duration_ms == 0 {
            return Err(WheelError::InvalidConfig(
                "duration_ms must be positive".to_string(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(WheelError::InvalidConfig(
                "history_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> WheelResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| WheelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn from_path(path: &Path) -> WheelResult<Self> {
        let config = Self::from_json(&read_file(path)?)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Serialize the config as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
