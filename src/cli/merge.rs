//! Merge command implementation

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Input;

use crate::config::{load_config, Config};
use crate::merge::concat;
use crate::output::{ensure_xlsx_extension, write_workbook};
use crate::scan::CsvScanner;
use crate::table::{load_table, Table};

#[derive(Args)]
pub struct MergeArgs {
    /// Directory containing CSV files
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Output workbook name (created inside the input directory)
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// File extension to discover (default: csv)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Path to config file (csv-merge.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Never prompt; fail instead of asking for missing inputs
    #[arg(long)]
    pub quick: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let interactive =
        !args.quick && std::io::stdin().is_terminal() && std::io::stdout().is_terminal();

    let root = match args.path {
        Some(path) => path,
        None if interactive => {
            let answer: String = Input::new()
                .with_prompt("Enter the folder path containing CSV files")
                .interact_text()
                .context("Failed to read folder path")?;
            PathBuf::from(answer.trim())
        }
        None => anyhow::bail!("--path must be specified in a non-interactive session"),
    };

    if !root.is_dir() {
        println!("Error: Folder '{}' does not exist!", root.display());
        return Ok(());
    }

    let config = load_config(&root, args.config.as_deref())?;

    let output_name = resolve_output_name(args.output, interactive, &config)?;
    let output_name = ensure_xlsx_extension(&output_name);

    let extension = args.ext.unwrap_or_else(|| config.extension.clone());

    let mut scanner =
        CsvScanner::new(root.clone()).extension(&extension).follow_symlinks(config.follow_symlinks);
    let files = scanner.scan()?;

    if files.is_empty() {
        println!("No CSV files found in '{}'", root.display());
        return Ok(());
    }
    println!("Found {} CSV file(s)", files.len());

    // Per-file failures are local: report, skip, keep going.
    let mut tables: Vec<Table> = Vec::new();
    let mut failed = 0usize;
    for file in &files {
        println!("Reading: {}", file.relative_path);
        match load_table(&file.path) {
            Ok(table) => tables.push(table),
            Err(e) => {
                failed += 1;
                let name = file
                    .path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(file.relative_path.as_str());
                println!("Error reading {}: {}", name, e);
            }
        }
    }

    if tables.is_empty() {
        println!("No data to merge!");
        return Ok(());
    }

    let merged = concat(&tables);

    let destination = root.join(&output_name);
    write_workbook(&merged, &destination, &config.sheet_name)
        .with_context(|| format!("Failed to write '{}'", destination.display()))?;

    println!();
    println!("Success! Merged {} CSV files into '{}'", tables.len(), destination.display());
    println!("Total rows: {}", merged.row_count());
    println!("Total columns: {}", merged.column_count());
    if failed > 0 {
        println!("Skipped {} file(s) that failed to parse", failed);
    }

    Ok(())
}

/// Output name precedence: flag > interactive prompt (empty answer falls
/// through) > config file > default.
fn resolve_output_name(flag: Option<String>, interactive: bool, config: &Config) -> Result<String> {
    if let Some(name) = flag {
        return Ok(name);
    }
    if interactive {
        let answer: String = Input::new()
            .with_prompt(format!("Enter output filename (press Enter for '{}')", config.output))
            .allow_empty(true)
            .interact_text()
            .context("Failed to read output filename")?;
        let trimmed = answer.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    Ok(config.output.clone())
}
