//! Input boundary: free text in, clean option lists out.

use std::path::Path;

use crate::error::{WheelResult, read_file};

/// Split one-option-per-line text into trimmed, non-blank options.
pub fn parse_options(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read an options file as one-per-line text.
pub fn read_options_file(path: &Path) -> WheelResult<String> {
    let text = read_file(path)?;
    tracing::debug!(path = %path.display(), lines = text.lines().count(), "options file read");
    Ok(text)
}
