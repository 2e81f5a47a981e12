//! Recursive discovery of CSV files under a directory tree.

pub mod scanner;

pub use scanner::{CsvFile, CsvScanner, ScanStats};
