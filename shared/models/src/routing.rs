//! Routing domain models for the Fabrica routing-export system.
//!
//! Defines the routing entry emitted for every approved (item, process)
//! pair, together with the fixed process table and the process-name to
//! routing-number mapping that drive the derivation.

use serde::{Deserialize, Serialize};

/// Manufacturing times value stamped on every emitted entry.
pub const MANUFACTURING_TIMES: u32 = 100;

/// Version written on the extra Packaging entry cloned for an item's
/// lowest revision.
pub const PACKAGING_CLONE_VERSION: u32 = 99;

/// Process name that triggers the lowest-revision clone.
pub const PACKAGING: &str = "Packaging";

/// A manufacturing process tracked by one fixed marker column of the BOM
/// sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessDefinition {
    pub name: &'static str,
    /// 0-based marker column in the BOM sheet.
    pub column: usize,
    /// Digit appended to the derived inventory code. Processes without a
    /// suffix reuse the item code as-is.
    pub suffix: Option<char>,
}

/// The eight processes in output order. Column assignments are frozen v1
/// contract of the BOM sheet; do not reorder.
pub const PROCESSES: [ProcessDefinition; 8] = [
    ProcessDefinition { name: "Extrusion", column: 50, suffix: Some('1') },
    ProcessDefinition { name: "UV", column: 51, suffix: Some('2') },
    ProcessDefinition { name: "UV+Bigsheet", column: 52, suffix: Some('3') },
    ProcessDefinition { name: "Profiling", column: 53, suffix: Some('4') },
    ProcessDefinition { name: "Profiling+Bevel", column: 54, suffix: Some('5') },
    ProcessDefinition { name: "Packaging", column: 55, suffix: None },
    ProcessDefinition { name: "Profiling+Bevel+Packaging", column: 56, suffix: None },
    ProcessDefinition { name: "Padding+Packaging", column: 57, suffix: None },
];

/// Process name → routing number. Names absent from this table resolve to
/// an empty routing number, not an error.
pub const ROUTING_NUMBERS: [(&str, u32); 7] = [
    ("Extrusion", 1),
    ("UV", 2),
    ("UV+Bigsheet", 11),
    ("Profiling", 4),
    ("Packaging", 6),
    ("Profiling+Bevel", 12),
    ("Padding+Packaging", 8),
];

/// Resolve the routing number for a process name.
pub fn routing_number_for(process_name: &str) -> Option<u32> {
    ROUTING_NUMBERS
        .iter()
        .find(|(name, _)| *name == process_name)
        .map(|(_, number)| *number)
}

/// One output row: a given item, at a given version, passing through a
/// given process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutingEntry {
    pub item_code: String,
    pub inventory_id: String,
    pub inventory_name: String,
    pub routing_name: String,
    pub version: u32,
    pub description: String,
    pub manufacturing_times: u32,
    pub sequence_no: String,
    pub routing_number: Option<u32>,
}

impl RoutingEntry {
    /// Build an entry with the fields the derivation never varies
    /// (inventory name, description, sequence no) left empty.
    pub fn new(
        item_code: impl Into<String>,
        inventory_id: impl Into<String>,
        routing_name: impl Into<String>,
        version: u32,
        routing_number: Option<u32>,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            inventory_id: inventory_id.into(),
            inventory_name: String::new(),
            routing_name: routing_name.into(),
            version,
            description: String::new(),
            manufacturing_times: MANUFACTURING_TIMES,
            sequence_no: String::new(),
            routing_number,
        }
    }
}
