//! Terminal UI for Synth Decider.
//!
//! Renders the wheel, the control panel, and the result overlay with
//! ratatui, and runs the celebration effects. Everything here reads state
//! from `sd_core::SpinController`; nothing flows back except user events.

pub mod animation;
pub mod app;
pub mod editor;
pub mod effects;
pub mod shared;
pub mod terminal;
pub mod views;
