//! Minimum-Version Index Builder
//!
//! First pass over the BOM grid: per approved item code, the smallest
//! raw version seen. Built strictly before entry generation and never
//! mutated afterwards; the Packaging clone rule compares against it.

use std::collections::{HashMap, HashSet};

use fabrica_models::BOM_DATA_START_ROW;

use super::{in_scope_row, normalize::normalize_version};

/// Reduce the in-scope BOM rows to a code → minimum raw version map.
/// Versions here are pre-adjustment values.
pub fn min_versions(
    bom_rows: &[Vec<String>],
    approved: &HashSet<String>,
) -> HashMap<String, u32> {
    let mut minimums: HashMap<String, u32> = HashMap::new();
    for row in bom_rows.iter().skip(BOM_DATA_START_ROW) {
        let Some((code, version_text)) = in_scope_row(row, approved) else {
            continue;
        };
        let version = normalize_version(version_text);
        minimums
            .entry(code.to_string())
            .and_modify(|current| *current = (*current).min(version))
            .or_insert(version);
    }
    minimums
}
