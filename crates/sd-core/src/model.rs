//! The ordered slice sequence and its angular geometry.
//!
//! A model always has [`SLICE_COUNT`] slices. The two obligation slices sit
//! at [`RIGGED_INDICES`], opposite each other, with a weight thin enough to
//! read as unlikely outcomes. Everything else is filled round-robin from the
//! user's casual options. Colours cycle through the palette regardless of
//! category so the rigged slices blend in.

use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::defaults::FALLBACK_OPTIONS;
use crate::error::{WheelError, WheelResult};
use crate::item::{Category, Mode, WheelItem};
use crate::palette::{Rgb, color_for};

/// Number of slices on every built wheel.
pub const SLICE_COUNT: usize = 20;

/// Positions of the two obligation slices.
pub const RIGGED_INDICES: [usize; 2] = [0, 10];

/// Angular extent of one slice, in degrees clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceGeometry {
    /// Start angle of the slice.
    pub offset: f64,
    /// Angular width of the slice.
    pub width: f64,
    /// Midpoint angle.
    pub center: f64,
}

impl SliceGeometry {
    /// End angle of the slice.
    pub fn end(&self) -> f64 {
        self.offset + self.width
    }

    /// Whether `angle` (degrees, already reduced to `[0, 360)`) lies in the slice.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.offset && angle <= self.end()
    }
}

/// An ordered sequence of wheel slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelModel {
    items: Vec<WheelItem>,
}

impl WheelModel {
    /// Build a wheel for `mode` from the user's casual options, with the
    /// default weights.
    ///
    /// Blank entries are dropped; if nothing is left the fallback pair is
    /// used instead. Pure: the same inputs always give the same model.
    pub fn build<S: AsRef<str>>(mode: Mode, options: &[S]) -> Self {
        Self::assemble(mode, options, &WheelConfig::default())
    }

    /// Like [`build`](Self::build), with `config`'s weights.
    ///
    /// Fails if the config would let the obligation slices stop being the
    /// thin ones, or if the weights cannot be summed.
    pub fn build_with<S: AsRef<str>>(
        mode: Mode,
        options: &[S],
        config: &WheelConfig,
    ) -> WheelResult<Self> {
        config.validate()?;
        Ok(Self::assemble(mode, options, config))
    }

    /// Build from an already validated config.
    pub(crate) fn assemble<S: AsRef<str>>(mode: Mode, options: &[S], config: &WheelConfig) -> Self {
        let mut casual: Vec<&str> = options
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !s.trim().is_empty())
            .collect();
        if casual.is_empty() {
            casual = FALLBACK_OPTIONS.to_vec();
        }

        let [first, second] = mode.obligations();
        let mut casual_pointer = 0;
        let mut items = Vec::with_capacity(SLICE_COUNT);

        for i in 0..SLICE_COUNT {
            let color = color_for(i);
            let item = if i == RIGGED_INDICES[0] {
                obligation("rigged-1", first, color, config.thin_weight)
            } else if i == RIGGED_INDICES[1] {
                obligation("rigged-2", second, color, config.thin_weight)
            } else {
                let label = casual[casual_pointer % casual.len()];
                casual_pointer += 1;
                WheelItem {
                    id: format!("fun-{i}"),
                    label: label.to_string(),
                    category: Category::Casual,
                    color,
                    text_color: Rgb::WHITE,
                    weight: config.normal_weight,
                }
            };
            items.push(item);
        }

        tracing::debug!(%mode, casual = casual.len(), "built wheel model");
        Self { items }
    }

    /// Wrap an arbitrary slice list without checking invariants.
    ///
    /// The resolver still validates the structure before spinning.
    pub fn from_items(items: Vec<WheelItem>) -> Self {
        Self { items }
    }

    /// All slices in order.
    pub fn items(&self) -> &[WheelItem] {
        &self.items
    }

    /// The slice at `index`.
    pub fn get(&self, index: usize) -> Option<&WheelItem> {
        self.items.get(index)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the model has no slices.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Labels of the casual slices, in slice order.
    pub fn casual_labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|i| i.category == Category::Casual)
            .map(|i| i.label.as_str())
            .collect()
    }

    /// Sum of every slice weight.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// Check the structure the resolver depends on. Returns the total weight.
    pub fn validate(&self) -> WheelResult<f64> {
        for &index in &RIGGED_INDICES {
            if index >= self.items.len() {
                return Err(WheelError::MissingRiggedSlice {
                    index,
                    len: self.items.len(),
                });
            }
        }
        for (index, item) in self.items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(WheelError::NonPositiveWeight {
                    index,
                    weight: item.weight,
                });
            }
        }
        let total = self.total_weight();
        if !total.is_finite() {
            return Err(WheelError::NonFiniteTotalWeight(total));
        }
        if total <= 0.0 {
            return Err(WheelError::ZeroTotalWeight);
        }
        Ok(total)
    }

    /// Angular extent of the slice at `index`, or `None` if out of range or
    /// the wheel has no weight.
    pub fn slice_geometry(&self, index: usize) -> Option<SliceGeometry> {
        let item = self.items.get(index)?;
        let total = self.total_weight();
        if total <= 0.0 {
            return None;
        }
        let before: f64 = self.items[..index].iter().map(|i| i.weight).sum();
        let offset = before / total * 360.0;
        let width = item.weight / total * 360.0;
        Some(SliceGeometry {
            offset,
            width,
            center: offset + width / 2.0,
        })
    }

    /// The slice under the fixed top pointer once the wheel has turned
    /// clockwise by `rotation` degrees.
    pub fn slice_under_pointer(&self, rotation: f64) -> Option<usize> {
        let angle = pointer_angle(rotation);
        let total = self.total_weight();
        if self.items.is_empty() || total <= 0.0 {
            return None;
        }
        let mut start = 0.0;
        for (index, item) in self.items.iter().enumerate() {
            let end = start + item.weight / total * 360.0;
            if angle < end {
                return Some(index);
            }
            start = end;
        }
        Some(self.items.len() - 1)
    }
}

/// The wheel angle sitting under the top pointer after a clockwise rotation.
pub fn pointer_angle(rotation: f64) -> f64 {
    (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0)
}

fn obligation(id: &str, label: &str, color: Rgb, weight: f64) -> WheelItem {
    WheelItem {
        id: id.to_string(),
        label: label.to_string(),
        category: Category::Obligation,
        color,
        text_color: Rgb::WHITE,
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_CASUAL_OPTIONS;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn twenty_slices_with_rigged_positions() {
        let model = WheelModel::build(Mode::Student, &DEFAULT_CASUAL_OPTIONS);
        assert_eq!(model.len(), SLICE_COUNT);
        for (i, item) in model.items().iter().enumerate() {
            if RIGGED_INDICES.contains(&i) {
                assert_eq!(item.category, Category::Obligation);
                assert_eq!(item.weight, 0.2);
            } else {
                assert_eq!(item.category, Category::Casual);
                assert_eq!(item.weight, 1.0);
            }
        }
        assert_eq!(model.items()[0].label, "Study");
        assert_eq!(model.items()[10].label, "Memorize");
        assert_eq!(model.items()[0].id, "rigged-1");
        assert_eq!(model.items()[10].id, "rigged-2");
        assert_eq!(model.items()[3].id, "fun-3");
    }

    #[test]
    fn default_list_fills_exactly() {
        let model = WheelModel::build(Mode::Worker, &DEFAULT_CASUAL_OPTIONS);
        assert_eq!(model.casual_labels(), DEFAULT_CASUAL_OPTIONS.to_vec());
        assert_eq!(model.items()[0].label, "Work");
        assert_eq!(model.items()[10].label, "Meeting");
    }

    #[test]
    fn short_list_wraps() {
        let model = WheelModel::build(Mode::Student, &["A", "B"]);
        let labels = model.casual_labels();
        assert_eq!(labels.len(), 18);
        for (i, label) in labels.iter().enumerate() {
            assert_eq!(*label, if i % 2 == 0 { "A" } else { "B" });
        }
        assert_eq!(labels.iter().filter(|l| **l == "A").count(), 9);
    }

    #[test]
    fn blank_entries_dropped() {
        let model = WheelModel::build(Mode::Student, &["", "  ", "Nap", "\t"]);
        assert!(model.casual_labels().iter().all(|l| *l == "Nap"));
    }

    #[test]
    fn empty_list_falls_back() {
        let empty: [&str; 0] = [];
        let model = WheelModel::build(Mode::Worker, &empty);
        let labels = model.casual_labels();
        assert_eq!(labels.len(), 18);
        assert_eq!(labels[0], "Void");
        assert_eq!(labels[1], "Emptiness");
        assert_eq!(labels[17], "Emptiness");

        let blank = WheelModel::build(Mode::Worker, &[" ", ""]);
        assert_eq!(blank, model);
    }

    #[test]
    fn colours_cycle_across_all_slices() {
        let model = WheelModel::build(Mode::Student, &["A"]);
        for (i, item) in model.items().iter().enumerate() {
            assert_eq!(item.color, color_for(i));
            assert_eq!(item.text_color, Rgb::WHITE);
        }
    }

    #[test]
    fn configured_weights() {
        let cfg = WheelConfig::default().with_weights(0.5, 3.0);
        let model = WheelModel::build_with(Mode::Student, &["A"], &cfg).unwrap();
        assert_eq!(model.items()[0].weight, 0.5);
        assert_eq!(model.items()[1].weight, 3.0);
        assert!(approx(model.total_weight(), 0.5 * 2.0 + 3.0 * 18.0));
    }

    #[test]
    fn configured_weights_must_keep_obligations_thin() {
        let cfg = WheelConfig::default().with_weights(2.0, 1.0);
        assert!(matches!(
            WheelModel::build_with(Mode::Student, &["A"], &cfg),
            Err(WheelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn deterministic() {
        let a = WheelModel::build(Mode::Student, &["x", "y", "z"]);
        let b = WheelModel::build(Mode::Student, &["x", "y", "z"]);
        assert_eq!(a, b);
    }

    #[test]
    fn geometry_of_rigged_slices() {
        let model = WheelModel::build(Mode::Student, &["A"]);
        // total = 0.4 + 18 = 18.4
        let g0 = model.slice_geometry(0).unwrap();
        assert!(approx(g0.offset, 0.0));
        assert!(approx(g0.width, 0.2 / 18.4 * 360.0));
        assert!(approx(g0.center, g0.width / 2.0));

        let g10 = model.slice_geometry(10).unwrap();
        assert!(approx(g10.offset, 9.2 / 18.4 * 360.0));
        assert!(approx(g10.width, g0.width));
        assert!(model.slice_geometry(20).is_none());
    }

    #[test]
    fn geometry_covers_full_circle() {
        let model = WheelModel::build(Mode::Worker, &DEFAULT_CASUAL_OPTIONS);
        let last = model.slice_geometry(SLICE_COUNT - 1).unwrap();
        assert!(approx(last.end(), 360.0));
    }

    #[test]
    fn pointer_angle_reduces() {
        assert!(approx(pointer_angle(0.0), 0.0));
        assert!(approx(pointer_angle(90.0), 270.0));
        assert!(approx(pointer_angle(720.0 + 350.0), 10.0));
    }

    #[test]
    fn pointer_lands_on_centered_slice() {
        let model = WheelModel::build(Mode::Student, &["A", "B"]);
        for index in 0..SLICE_COUNT {
            let g = model.slice_geometry(index).unwrap();
            let rotation = 360.0 * 3.0 + (360.0 - g.center);
            assert_eq!(model.slice_under_pointer(rotation), Some(index));
        }
    }

    #[test]
    fn validate_catches_bad_models() {
        let model = WheelModel::build(Mode::Student, &["A"]);
        assert!(model.validate().is_ok());

        let short = WheelModel::from_items(model.items()[..5].to_vec());
        assert_eq!(
            short.validate(),
            Err(WheelError::MissingRiggedSlice { index: 10, len: 5 })
        );

        let mut items = model.items().to_vec();
        items[4].weight = 0.0;
        assert_eq!(
            WheelModel::from_items(items).validate(),
            Err(WheelError::NonPositiveWeight {
                index: 4,
                weight: 0.0
            })
        );

        let mut items = model.items().to_vec();
        for item in &mut items {
            item.weight = f64::MAX;
        }
        assert_eq!(
            WheelModel::from_items(items).validate(),
            Err(WheelError::NonFiniteTotalWeight(f64::INFINITY))
        );

        let empty = WheelModel::from_items(Vec::new());
        assert!(matches!(
            empty.validate(),
            Err(WheelError::MissingRiggedSlice { index: 0, len: 0 })
        ));
        assert_eq!(empty.slice_under_pointer(10.0), None);
    }
}
