//! Directory walker that collects CSV files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;
use walkdir::WalkDir;

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub path: PathBuf,
    /// Path relative to the scan root, with forward slashes.
    pub relative_path: String,
}

/// Counters collected during a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_seen: usize,
    pub files_matched: usize,
    pub total_bytes: u64,
}

/// Walks a directory tree and returns every file whose extension matches the
/// configured suffix.
///
/// Results are sorted by relative path, so scanning an unchanged tree twice
/// yields the same ordered set regardless of filesystem enumeration order.
pub struct CsvScanner {
    root: PathBuf,
    extension: String,
    follow_symlinks: bool,
    stats: ScanStats,
}

impl CsvScanner {
    /// Create a scanner with the default `csv` suffix filter.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "csv".to_string(),
            follow_symlinks: false,
            stats: ScanStats::default(),
        }
    }

    /// Set the extension to match (leading dot optional). Matching is exact
    /// and case-sensitive: `report.CSV` does not match `csv`.
    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Scan the tree. A missing root or a tree with no matches yields an
    /// empty list; neither is an error.
    pub fn scan(&mut self) -> Result<Vec<CsvFile>> {
        self.stats = ScanStats::default();

        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry_result in WalkDir::new(&self.root).follow_links(self.follow_symlinks) {
            let entry = match entry_result {
                Ok(e) => e,
                // Unreadable entries are skipped, not fatal
                Err(_) => continue,
            };
            if !entry.file_type().is_file() {
                continue;
            }
            self.stats.files_seen += 1;

            if !matches_extension(entry.path(), &self.extension) {
                continue;
            }

            let rel_path = match entry.path().strip_prefix(&self.root) {
                Ok(p) => normalize_path(&p.to_string_lossy()),
                Err(_) => continue,
            };

            if let Ok(metadata) = entry.metadata() {
                self.stats.total_bytes += metadata.len();
            }
            self.stats.files_matched += 1;
            found.push(CsvFile { path: entry.path().to_path_buf(), relative_path: rel_path });
        }

        // Sort by relative path for deterministic ordering
        found.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        debug!(
            "scan of {}: matched {} of {} files",
            self.root.display(),
            self.stats.files_matched,
            self.stats.files_seen
        );
        Ok(found)
    }

    /// Get scanning statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scanner_recursive_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("b.csv"), "x,y\n").unwrap();
        fs::write(root.join("a.csv"), "x,y\n").unwrap();
        fs::write(root.join("sub/c.csv"), "x,y\n").unwrap();
        fs::write(root.join("notes.txt"), "not a csv").unwrap();

        let mut scanner = CsvScanner::new(root.to_path_buf());
        let files = scanner.scan().unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["a.csv", "b.csv", "sub/c.csv"]);
        assert_eq!(scanner.stats().files_matched, 3);
        assert_eq!(scanner.stats().files_seen, 4);
    }

    #[test]
    fn test_scanner_missing_root_is_empty() {
        let mut scanner = CsvScanner::new(PathBuf::from("/no/such/directory"));
        let files = scanner.scan().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scanner_extension_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("lower.csv"), "x\n").unwrap();
        fs::write(root.join("upper.CSV"), "x\n").unwrap();
        fs::write(root.join("double.csv.bak"), "x\n").unwrap();

        let mut scanner = CsvScanner::new(root.to_path_buf());
        let files = scanner.scan().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "lower.csv");
    }

    #[test]
    fn test_scanner_custom_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("data.tsv"), "x\ty\n").unwrap();
        fs::write(root.join("data.csv"), "x,y\n").unwrap();

        let mut scanner = CsvScanner::new(root.to_path_buf()).extension(".tsv");
        let files = scanner.scan().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "data.tsv");
    }

    #[test]
    fn test_scanner_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("deep/nested")).unwrap();
        fs::write(root.join("one.csv"), "a\n").unwrap();
        fs::write(root.join("deep/two.csv"), "a\n").unwrap();
        fs::write(root.join("deep/nested/three.csv"), "a\n").unwrap();

        let first = CsvScanner::new(root.to_path_buf()).scan().unwrap();
        let second = CsvScanner::new(root.to_path_buf()).scan().unwrap();
        assert_eq!(first, second);
    }
}
