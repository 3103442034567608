//! Workbook Parser
//!
//! Extracts the request and BOM sheets of an uploaded XLSX workbook as
//! rectangular grids of cell text. Addressing inside the grids is
//! absolute and 0-based so the fixed row/column contract of the sheet
//! layout applies directly; blank cells become empty strings.

use std::io::{Read, Seek};
use std::path::Path;

use calamine::{open_workbook, open_workbook_from_rs, DataType, Range, Reader, Xlsx, XlsxError};

use crate::error::{RoutingError, RoutingResult};
use fabrica_models::{BOM_SHEET, REQUEST_SHEET};

/// The two sheets the derivation reads, as cell-text grids.
#[derive(Debug, Clone)]
pub struct WorkbookGrids {
    pub request_rows: Vec<Vec<String>>,
    pub bom_rows: Vec<Vec<String>>,
}

/// Parse an uploaded workbook held in memory.
pub fn parse_workbook_bytes(data: &[u8]) -> RoutingResult<WorkbookGrids> {
    let cursor = std::io::Cursor::new(data);
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(cursor).map_err(|e: XlsxError| RoutingError::workbook(e.to_string()))?;
    grids_from_workbook(&mut workbook)
}

/// Parse an uploaded workbook spooled to disk.
pub fn parse_workbook_path(path: impl AsRef<Path>) -> RoutingResult<WorkbookGrids> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| RoutingError::workbook(e.to_string()))?;
    grids_from_workbook(&mut workbook)
}

fn grids_from_workbook<RS: Read + Seek>(workbook: &mut Xlsx<RS>) -> RoutingResult<WorkbookGrids> {
    let request_rows = named_sheet_grid(workbook, REQUEST_SHEET)?;
    let bom_rows = named_sheet_grid(workbook, BOM_SHEET)?;
    Ok(WorkbookGrids {
        request_rows,
        bom_rows,
    })
}

fn named_sheet_grid<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    sheet: &str,
) -> RoutingResult<Vec<Vec<String>>> {
    let range = workbook
        .worksheet_range(sheet)
        .ok_or_else(|| RoutingError::missing_sheet(sheet))?
        .map_err(RoutingError::from)?;
    Ok(grid_from_range(&range))
}

/// Flatten a cell range into an absolute grid. `Range` is anchored at its
/// first occupied cell, so rows and columns before the anchor are padded
/// back in as empty strings.
fn grid_from_range(range: &Range<DataType>) -> Vec<Vec<String>> {
    let Some((end_row, end_col)) = range.end() else {
        return Vec::new();
    };

    (0..=end_row as usize)
        .map(|row| {
            (0..=end_col as usize)
                .map(|col| {
                    range
                        .get_value((row as u32, col as u32))
                        .map(|cell| cell.to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}
