//! Code & Version Normalizer
//!
//! Pure, total cell-text normalization. Absence is represented by
//! `None`/0, never by an error.

/// Canonical item code: trimmed cell text, `None` when nothing remains.
/// Matching is exact after trimming; no case folding.
pub fn normalize_code(raw: &str) -> Option<&str> {
    let code = raw.trim();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

/// Version number: digits of the cell, everything else stripped. Cells
/// with no digits (or digits that overflow) normalize to 0.
pub fn normalize_version(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
