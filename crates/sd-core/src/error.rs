//! Error types for the wheel engine.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Result type for wheel operations.
pub type WheelResult<T> = Result<T, WheelError>;

/// Read a whole file, mapping failures to [`WheelError::Read`].
pub(crate) fn read_file(path: &Path) -> WheelResult<String> {
    fs::read_to_string(path).map_err(|e| WheelError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Errors that can occur while building or spinning the wheel.
#[derive(Debug, Error, PartialEq)]
pub enum WheelError {
    /// The model is too short to hold a rigged slice.
    #[error("wheel has {len} slices, rigged slice {index} is missing")]
    MissingRiggedSlice {
        /// The rigged index that was expected.
        index: usize,
        /// Number of slices actually present.
        len: usize,
    },

    /// A slice has a zero, negative, or non-finite weight.
    #[error("slice {index} has invalid weight {weight}")]
    NonPositiveWeight {
        /// Index of the offending slice.
        index: usize,
        /// The weight found.
        weight: f64,
    },

    /// The weights sum to zero.
    #[error("total slice weight is zero")]
    ZeroTotalWeight,

    /// The weights sum past the range of `f64`.
    #[error("total slice weight {0} is not finite")]
    NonFiniteTotalWeight(f64),

    /// A mode name outside the known set.
    #[error("unknown mode: {0} (expected 'student' or 'worker')")]
    UnknownMode(String),

    /// A config or options file could not be read.
    #[error("cannot read {path}: {message}")]
    Read {
        /// The file that failed.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// A configuration value breaks an invariant.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = WheelError::MissingRiggedSlice { index: 10, len: 4 };
        assert_eq!(e.to_string(), "wheel has 4 slices, rigged slice 10 is missing");
        assert_eq!(
            WheelError::UnknownMode("boss".into()).to_string(),
            "unknown mode: boss (expected 'student' or 'worker')"
        );
        assert_eq!(
            WheelError::ZeroTotalWeight.to_string(),
            "total slice weight is zero"
        );
        assert_eq!(
            WheelError::NonFiniteTotalWeight(f64::INFINITY).to_string(),
            "total slice weight inf is not finite"
        );
    }
}
