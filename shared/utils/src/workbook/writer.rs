//! Result Workbook Writer
//!
//! Renders the ordered routing entry list as a single-sheet workbook:
//! one header row, one row per entry, column order frozen. Pure
//! formatting, no business logic.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::RoutingResult;
use fabrica_models::{RoutingEntry, RESULT_HEADERS, RESULT_SHEET};

/// Render the result workbook into an in-memory buffer.
pub fn write_result_buffer(entries: &[RoutingEntry]) -> RoutingResult<Vec<u8>> {
    let mut workbook = build_workbook(entries)?;
    Ok(workbook.save_to_buffer()?)
}

/// Render the result workbook to a file.
pub fn write_result_file(entries: &[RoutingEntry], path: impl AsRef<Path>) -> RoutingResult<()> {
    let mut workbook = build_workbook(entries)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

fn build_workbook(entries: &[RoutingEntry]) -> RoutingResult<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(RESULT_SHEET)?;

    for (col, header) in RESULT_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (idx, entry) in entries.iter().enumerate() {
        write_entry_row(sheet, (idx + 1) as u32, entry)?;
    }

    Ok(workbook)
}

fn write_entry_row(sheet: &mut Worksheet, row: u32, entry: &RoutingEntry) -> RoutingResult<()> {
    sheet.write_string(row, 0, &entry.item_code)?;
    sheet.write_string(row, 1, &entry.inventory_id)?;
    sheet.write_string(row, 2, &entry.inventory_name)?;
    sheet.write_number(row, 3, entry.version as f64)?;
    sheet.write_string(row, 4, &entry.description)?;
    sheet.write_string(row, 5, &entry.sequence_no)?;
    // An unresolved routing number stays a blank cell
    if let Some(number) = entry.routing_number {
        sheet.write_number(row, 6, number as f64)?;
    }
    sheet.write_string(row, 7, &entry.routing_name)?;
    sheet.write_number(row, 8, entry.manufacturing_times as f64)?;
    Ok(())
}
