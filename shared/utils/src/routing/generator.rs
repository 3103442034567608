//! Routing Entry Generator
//!
//! Second pass over the BOM grid: for each in-scope row, scan the fixed
//! process columns and emit one routing entry per marked process, plus
//! the Packaging clone for rows at their item's minimum revision.
//! Process order determines output order; entries are append-only.

use std::collections::{HashMap, HashSet};

use fabrica_models::{
    routing_number_for, RoutingEntry, BOM_DATA_START_ROW, PACKAGING, PACKAGING_CLONE_VERSION,
    PROCESSES,
};

use super::{in_scope_row, normalize::normalize_version};

/// Scan in-scope BOM rows against the process table and emit routing
/// entries in row-major, process-table order.
pub fn generate_entries(
    bom_rows: &[Vec<String>],
    approved: &HashSet<String>,
    minimums: &HashMap<String, u32>,
) -> Vec<RoutingEntry> {
    let mut entries = Vec::new();

    for row in bom_rows.iter().skip(BOM_DATA_START_ROW) {
        let Some((code, version_text)) = in_scope_row(row, approved) else {
            continue;
        };
        let raw_version = normalize_version(version_text);

        for process in &PROCESSES {
            let marker = row.get(process.column).map(String::as_str).unwrap_or("");
            if !is_marked(marker) {
                continue;
            }

            let routing_number = routing_number_for(process.name);
            entries.push(RoutingEntry::new(
                code,
                derive_inventory_id(code, process.suffix),
                process.name,
                adjust_version(raw_version),
                routing_number,
            ));

            // The item's lowest revision gets an extra Packaging entry on
            // the undecorated code, pinned to the clone version. Compared
            // on raw versions; ties each emit their own clone.
            if process.name == PACKAGING && minimums.get(code) == Some(&raw_version) {
                entries.push(RoutingEntry::new(
                    code,
                    code,
                    PACKAGING,
                    PACKAGING_CLONE_VERSION,
                    routing_number,
                ));
            }
        }
    }

    entries
}

fn is_marked(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case("X")
}

/// Inventory code for a suffixed process: leading character replaced with
/// '4', suffix digit appended. Processes without a suffix reuse the item
/// code unchanged.
pub fn derive_inventory_id(code: &str, suffix: Option<char>) -> String {
    match suffix {
        Some(digit) => {
            let mut id = String::with_capacity(code.len() + 2);
            id.push('4');
            id.extend(code.chars().skip(1));
            id.push(digit);
            id
        }
        None => code.to_string(),
    }
}

/// Version bump applied on emission: 3 becomes 4 and 4 becomes 5,
/// everything else passes through.
pub fn adjust_version(version: u32) -> u32 {
    match version {
        3 => 4,
        4 => 5,
        other => other,
    }
}
