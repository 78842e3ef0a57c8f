//! Whitespace-insensitive comparison of generated documents

use crate::io::error::{Result, file_system};
use std::path::Path;

/// Drop every whitespace character
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Compare two strings ignoring all whitespace
pub fn equal_ignoring_whitespace(left: &str, right: &str) -> bool {
    strip_whitespace(left.trim()) == strip_whitespace(right.trim())
}

/// Compare two files ignoring all whitespace
///
/// # Errors
///
/// Returns an error if either file cannot be read
pub fn compare_files(left: &Path, right: &Path) -> Result<bool> {
    let left_text = std::fs::read_to_string(left).map_err(file_system(left, "read"))?;
    let right_text = std::fs::read_to_string(right).map_err(file_system(right, "read"))?;
    Ok(equal_ignoring_whitespace(&left_text, &right_text))
}
