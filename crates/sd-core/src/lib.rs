//! Core engine for Synth Decider.
//!
//! Builds a 20-slice weighted wheel from a list of casual options, resolves
//! spins onto one of the two thin obligation slices, and tracks spin state
//! (cumulative rotation, pending completion, result, history) for a
//! presentation layer to consume.

pub mod config;
pub mod controller;
pub mod defaults;
pub mod error;
pub mod history;
pub mod input;
pub mod item;
pub mod model;
pub mod palette;
pub mod resolver;

pub use config::WheelConfig;
pub use controller::{SpinController, SpinRequest};
pub use error::{WheelError, WheelResult};
pub use history::History;
pub use input::{parse_options, read_options_file};
pub use item::{Category, Mode, WheelItem};
pub use model::{RIGGED_INDICES, SLICE_COUNT, SliceGeometry, WheelModel};
pub use palette::Rgb;
pub use resolver::{SpinOutcome, resolve_spin};
