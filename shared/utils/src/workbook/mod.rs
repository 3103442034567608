//! Workbook I/O
//!
//! Reads the two named sheets of an uploaded workbook into positional
//! grids, and renders the derived routing entries as the result workbook.

pub mod parser;
pub mod writer;

pub use parser::{parse_workbook_bytes, parse_workbook_path, WorkbookGrids};
pub use writer::{write_result_buffer, write_result_file};
