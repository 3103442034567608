//! Eligibility Index
//!
//! The set of item codes approved for export, read from the request
//! sheet. Read-only once built; scoped to one request.

use std::collections::HashSet;

use fabrica_models::{REQUEST_CODE_COLUMN, REQUEST_DATA_START_ROW};

use super::normalize::normalize_code;

/// Collect the approved item codes from the request grid. The first two
/// rows are header/metadata and are skipped unconditionally.
pub fn approved_codes(request_rows: &[Vec<String>]) -> HashSet<String> {
    let mut codes = HashSet::new();
    for row in request_rows.iter().skip(REQUEST_DATA_START_ROW) {
        let raw = row
            .get(REQUEST_CODE_COLUMN)
            .map(String::as_str)
            .unwrap_or("");
        if let Some(code) = normalize_code(raw) {
            codes.insert(code.to_string());
        }
    }
    codes
}
