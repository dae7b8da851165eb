//! Spin resolution.
//!
//! The outcome is decided by a single coin flip between the two rigged
//! slices. Everything else the RNG produces (extra turns, jitter) only shapes
//! the visible path: how far the wheel travels and where inside the slice the
//! pointer comes to rest.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::error::{WheelError, WheelResult};
use crate::item::WheelItem;
use crate::model::{RIGGED_INDICES, WheelModel};

/// The result of resolving one spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Index of the slice the wheel lands on.
    pub target_index: usize,
    /// Cumulative rotation (degrees, clockwise) the wheel ends at.
    pub final_rotation: f64,
    /// The slice under the pointer when the wheel stops.
    pub landed: WheelItem,
    /// How long the spin animation runs.
    pub duration_ms: u64,
    /// Cosmetic full turns added on top of the alignment.
    pub extra_turns: u32,
    /// Offset from the slice centre, in degrees.
    pub jitter: f64,
}

/// Resolve a spin starting from `current_rotation`.
///
/// Fails without touching any state if the config is invalid, or the model
/// lacks a rigged slice or has an invalid weight.
pub fn resolve_spin<R: Rng>(
    model: &WheelModel,
    current_rotation: f64,
    config: &WheelConfig,
    rng: &mut R,
) -> WheelResult<SpinOutcome> {
    config.validate()?;
    model.validate()?;
    let target_index = if rng.random_bool(0.5) {
        RIGGED_INDICES[0]
    } else {
        RIGGED_INDICES[1]
    };
    resolve_target(model, target_index, current_rotation, config, rng)
}

/// Resolve a spin onto a known slice. The cosmetic draws still come from `rng`.
pub fn resolve_target<R: Rng>(
    model: &WheelModel,
    target_index: usize,
    current_rotation: f64,
    config: &WheelConfig,
    rng: &mut R,
) -> WheelResult<SpinOutcome> {
    config.validate()?;
    let total = model.validate()?;
    let items = model.items();
    if target_index >= items.len() {
        return Err(WheelError::MissingRiggedSlice {
            index: target_index,
            len: items.len(),
        });
    }

    let before: f64 = items[..target_index].iter().map(|i| i.weight).sum();
    let offset = before / total * 360.0;
    let width = items[target_index].weight / total * 360.0;
    let center = offset + width / 2.0;

    let alignment = (360.0 - center).rem_euclid(360.0);

    let bound = config.jitter_fraction * width;
    let jitter = if bound > 0.0 {
        rng.random_range(-bound..=bound)
    } else {
        0.0
    };

    let base = (current_rotation / 360.0).ceil() * 360.0;
    let extra_turns = rng.random_range(config.min_extra_turns..=config.max_extra_turns);
    let extra = 360.0 * f64::from(extra_turns);

    let final_rotation = base + extra + alignment + jitter;

    tracing::debug!(
        target_index,
        offset,
        width,
        jitter,
        extra_turns,
        final_rotation,
        "resolved spin"
    );

    Ok(SpinOutcome {
        target_index,
        final_rotation,
        landed: items[target_index].clone(),
        duration_ms: config.duration_ms,
        extra_turns,
        jitter,
    })
}
