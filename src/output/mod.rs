//! Workbook output: a single worksheet, header row plus data rows.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::table::Table;

pub const XLSX_EXTENSION: &str = ".xlsx";

/// Errors from writing the merged workbook. Fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Workbook serialization or destination I/O failed
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Append `.xlsx` when the name does not already end with it.
pub fn ensure_xlsx_extension(name: &str) -> String {
    if name.ends_with(XLSX_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{XLSX_EXTENSION}")
    }
}

/// Serialize a table to a single-sheet workbook.
///
/// Header row first, then data rows in table order. Every cell is written as
/// a string; no styling, no index column.
pub fn write_workbook(table: &Table, destination: &Path, sheet_name: &str) -> Result<(), WriteError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, value)?;
        }
    }

    workbook.save(destination)?;
    Ok(())
}
