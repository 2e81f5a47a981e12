//! CSV parsing into in-memory tables.

use std::path::Path;

use tracing::debug;

use crate::utils::encoding::decode_text;

/// One parsed CSV file: header columns plus rows aligned to those columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Errors from loading a single CSV file.
///
/// Each is local to that file; the caller reports it, skips the file, and
/// keeps going.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read file
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    /// Content is binary or has a broken encoding
    #[error("file is not decodable text")]
    Encoding,
    /// File is empty or has no header row
    #[error("file has no header row")]
    MissingHeader,
    /// Structurally broken rows, bad quoting, unequal field counts
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a delimited text file into a [`Table`], using the first record as
/// the header row.
///
/// Parsing is strict: a row whose field count differs from the header fails
/// the whole file.
pub fn load_table(path: &Path) -> Result<Table, ParseError> {
    let bytes = std::fs::read(path)?;
    let (text, encoding) = decode_text(&bytes).ok_or(ParseError::Encoding)?;
    debug!("decoded {} as {}", path.display(), encoding);

    let mut reader = csv::ReaderBuilder::new().flexible(false).from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(ParseError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { columns, rows })
}
