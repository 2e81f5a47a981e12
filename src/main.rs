//! csv-merge: merge every CSV file under a directory tree into one workbook
//!
//! Recursively discovers CSV files, parses each into an in-memory table,
//! concatenates them with column-union alignment, and writes the result to a
//! single-sheet Excel workbook.

use anyhow::Result;

mod cli;
mod config;
mod merge;
mod output;
mod scan;
mod table;
mod utils;

fn main() -> Result<()> {
    cli::run()
}
