//! Wheel slices, their categories, and the operating mode.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;
use crate::palette::Rgb;

/// Which pair of obligations the wheel hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// School life: study and memorization.
    #[default]
    Student,
    /// Office life: work and meetings.
    Worker,
}

impl Mode {
    /// Both modes in display order.
    pub const ALL: [Mode; 2] = [Mode::Student, Mode::Worker];

    /// Parse a mode name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(Self::Student),
            "worker" => Some(Self::Worker),
            _ => None,
        }
    }

    /// The two obligation labels, in slice order (index 0, then index 10).
    pub fn obligations(self) -> [&'static str; 2] {
        match self {
            Self::Student => ["Study", "Memorize"],
            Self::Worker => ["Work", "Meeting"],
        }
    }

    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::Student => Self::Worker,
            Self::Worker => Self::Student,
        }
    }
}

impl FromStr for Mode {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| WheelError::UnknownMode(s.to_string()))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Worker => write!(f, "worker"),
        }
    }
}

/// Whether a slice is something the user wants or something they owe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A user-supplied fun option.
    Casual,
    /// One of the two rigged outcomes.
    Obligation,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Casual => write!(f, "casual"),
            Self::Obligation => write!(f, "obligation"),
        }
    }
}

/// One slice of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelItem {
    /// Stable identifier (`rigged-1`, `rigged-2`, `fun-<index>`).
    pub id: String,
    /// Display text.
    pub label: String,
    /// Casual or obligation.
    pub category: Category,
    /// Fill colour.
    pub color: Rgb,
    /// Label colour.
    pub text_color: Rgb,
    /// Share of the wheel's circumference, relative to the total.
    pub weight: f64,
}

impl WheelItem {
    /// Whether this slice is one of the rigged outcomes.
    pub fn is_obligation(&self) -> bool {
        self.category == Category::Obligation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse() {
        assert_eq!(Mode::parse("student"), Some(Mode::Student));
        assert_eq!(Mode::parse(" WORKER "), Some(Mode::Worker));
        assert_eq!(Mode::parse("boss"), None);
        assert_eq!(
            "boss".parse::<Mode>(),
            Err(WheelError::UnknownMode("boss".to_string()))
        );
    }

    #[test]
    fn mode_obligations() {
        assert_eq!(Mode::Student.obligations(), ["Study", "Memorize"]);
        assert_eq!(Mode::Worker.obligations(), ["Work", "Meeting"]);
    }

    #[test]
    fn mode_toggle_and_display() {
        assert_eq!(Mode::Student.toggle(), Mode::Worker);
        assert_eq!(Mode::Worker.toggle().toggle(), Mode::Worker);
        assert_eq!(Mode::Worker.to_string(), "worker");
        assert_eq!(Mode::default(), Mode::Student);
    }

    #[test]
    fn mode_serde() {
        let json = serde_json::to_string(&Mode::Worker).unwrap();
        assert_eq!(json, "\"worker\"");
        let back: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mode::Worker);
    }
}
