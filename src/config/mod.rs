//! Configuration loading
//!
//! Defaults, overridden by an optional TOML config file in the input
//! directory, overridden by CLI arguments (CLI > File > Defaults).

pub mod loader;

pub use loader::load_config;

use serde::Deserialize;

/// Tool configuration. Every field has a default, so a partial config file
/// is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output workbook name, created inside the input directory.
    pub output: String,
    /// Extension matched during discovery (leading dot optional).
    pub extension: String,
    /// Worksheet name in the output workbook.
    pub sheet_name: String,
    /// Follow symbolic links when scanning.
    pub follow_symlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: "merged_output.xlsx".to_string(),
            extension: "csv".to_string(),
            sheet_name: "Sheet1".to_string(),
            follow_symlinks: false,
        }
    }
}
