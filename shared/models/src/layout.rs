//! Workbook layout contract for the routing export.
//!
//! Sheet names, positional offsets, and the result header row are frozen
//! v1 contract shared with the planning department's workbook template.
//! Addressing is 0-based throughout.

/// Request sheet: the list of item codes approved for export.
pub const REQUEST_SHEET: &str = "YC XUẤT BOM";

/// BOM sheet: per item-code and per process, whether that process applies.
pub const BOM_SHEET: &str = "Thông tin khai BOM";

/// Name of the single sheet in the generated workbook.
pub const RESULT_SHEET: &str = "result";

/// Logical filename of the download returned to the client.
pub const RESULT_FILENAME: &str = "Routing_result.xlsx";

/// Header row of the result sheet, in column order.
pub const RESULT_HEADERS: [&str; 9] = [
    "mã đầu 5",
    "InventoryID",
    "Inventory Name",
    "Version",
    "Description",
    "No",
    "Routing No",
    "Routing Name",
    "MFTimes",
];

/// First data row of the request sheet; rows above are header/metadata.
pub const REQUEST_DATA_START_ROW: usize = 2;

/// Item-code column of the request sheet.
pub const REQUEST_CODE_COLUMN: usize = 2;

/// First data row of the BOM sheet; rows above are header/metadata.
pub const BOM_DATA_START_ROW: usize = 4;

/// Item-code column of the BOM sheet.
pub const BOM_CODE_COLUMN: usize = 2;

/// Version column of the BOM sheet.
pub const BOM_VERSION_COLUMN: usize = 3;
