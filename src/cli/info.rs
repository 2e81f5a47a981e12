//! Info command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::merge::concat;
use crate::scan::CsvScanner;
use crate::table::load_table;

#[derive(Args)]
pub struct InfoArgs {
    /// Directory to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// File extension to discover (default: csv)
    #[arg(long, value_name = "EXT", default_value = "csv")]
    pub ext: String,
}

/// Dry run: discover and parse, report the would-be merged shape, write
/// nothing.
pub fn run(args: InfoArgs) -> Result<()> {
    let root = args.path.canonicalize()?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let mut scanner = CsvScanner::new(root.clone()).extension(&args.ext);
    let files = scanner.scan()?;
    let stats = scanner.stats().clone();

    println!("Directory: {}", root.display());
    println!("Found {} CSV file(s)", files.len());

    let mut tables = Vec::new();
    let mut failed = 0usize;
    for file in &files {
        match load_table(&file.path) {
            Ok(table) => {
                println!(
                    "  {}: {} rows, {} columns",
                    file.relative_path,
                    table.row_count(),
                    table.column_count()
                );
                tables.push(table);
            }
            Err(e) => {
                failed += 1;
                println!("  {}: unreadable ({})", file.relative_path, e);
            }
        }
    }

    let merged = concat(&tables);

    println!("Statistics:");
    println!("  Files seen: {}", stats.files_seen);
    println!("  Files matched: {}", stats.files_matched);
    println!("  Files parsed: {}", tables.len());
    println!("  Files failed: {}", failed);
    println!("  Total bytes: {}", stats.total_bytes);
    println!("  Merged rows: {}", merged.row_count());
    println!("  Merged columns: {}", merged.column_count());

    Ok(())
}
