//! Routing Derivation Engine
//!
//! Turns the request and BOM grids of an uploaded workbook into the
//! ordered routing entry list: eligibility filter over the request sheet,
//! a per-item minimum-revision pass over the BOM sheet, then a second
//! pass scanning the fixed process columns to emit entries.
//!
//! The engine is total over arbitrary grid input: rows with missing data
//! are skipped, never rejected, and no step here returns an error.

pub mod eligibility;
pub mod generator;
pub mod min_version;
pub mod normalize;

pub use eligibility::approved_codes;
pub use generator::{adjust_version, derive_inventory_id, generate_entries};
pub use min_version::min_versions;
pub use normalize::{normalize_code, normalize_version};

use std::collections::HashSet;

use fabrica_models::{RoutingEntry, BOM_CODE_COLUMN, BOM_VERSION_COLUMN};

/// Full derivation: request grid → eligibility set, BOM grid → minimum
/// index, then entry generation. Emission order is preserved end to end.
pub fn derive_routing(request_rows: &[Vec<String>], bom_rows: &[Vec<String>]) -> Vec<RoutingEntry> {
    let approved = approved_codes(request_rows);
    let minimums = min_versions(bom_rows, &approved);
    generate_entries(bom_rows, &approved, &minimums)
}

/// Code and version text of a BOM row, if the row is in scope: both cells
/// non-empty after trimming and the code approved. Both scan passes share
/// this filter so they agree on which rows count.
pub(crate) fn in_scope_row<'a>(
    row: &'a [String],
    approved: &HashSet<String>,
) -> Option<(&'a str, &'a str)> {
    let code = normalize_code(row.get(BOM_CODE_COLUMN).map(String::as_str).unwrap_or(""))?;
    let version = row
        .get(BOM_VERSION_COLUMN)
        .map(String::as_str)
        .unwrap_or("")
        .trim();
    if version.is_empty() || !approved.contains(code) {
        return None;
    }
    Some((code, version))
}
