//! Directory scanning for stack detection.
//!
//! The scanner lists the top-level entries of the target directory. Hidden
//! entries are skipped unless they appear on the allow-list in
//! [`crate::registry::ALLOWED_HIDDEN`], since a handful of hidden files and
//! directories (`.env`, `.idea`, `.dockerignore`, ...) are themselves stack
//! markers.

use crate::error::ScanError;
use crate::registry::is_allowed_hidden;
use std::path::{Path, PathBuf};

/// Scans a project directory for files and directories that indicate its
/// technology stacks.
#[derive(Debug, Clone)]
pub struct Scanner {
    root_dir: PathBuf,
}

impl Scanner {
    /// Creates a scanner rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Returns the directory this scanner is rooted at.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Lists the names present at the top level of the root directory.
    ///
    /// Files and directories are both reported. Hidden entries are omitted
    /// unless they are detection-relevant. An unreadable or missing root
    /// directory is fatal for the whole run.
    pub fn scan(&self) -> Result<Vec<String>, ScanError> {
        if !self.root_dir.exists() {
            return Err(ScanError::NotFound {
                path: self.root_dir.clone(),
            });
        }
        if !self.root_dir.is_dir() {
            return Err(ScanError::NotADirectory {
                path: self.root_dir.clone(),
            });
        }

        let entries = std::fs::read_dir(&self.root_dir).map_err(|source| ScanError::ReadFailed {
            path: self.root_dir.clone(),
            source,
        })?;

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::ReadFailed {
                path: self.root_dir.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if name.starts_with('.') && !is_allowed_hidden(&name) {
                continue;
            }
            found.push(name);
        }

        found.sort();
        Ok(found)
    }

    /// Checks whether a file or directory exists under the root.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.root_dir.join(name).exists()
    }

    /// Returns the full path of an entry under the root.
    #[must_use]
    pub fn full_path(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// # Basic Directory Scan
    ///
    /// Verifies that visible files and directories are reported.
    ///
    /// ## Test Scenario
    /// - Creates a directory containing a file, a subdirectory, and a
    ///   non-allowed hidden file
    ///
    /// ## Expected Outcome
    /// - File and subdirectory are listed; the hidden file is not
    #[test]
    fn test_scan_lists_visible_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join(".hidden-notes"), "").unwrap();

        let scanner = Scanner::new(dir.path());
        let names = scanner.scan().unwrap();

        assert!(names.contains(&"package.json".to_string()));
        assert!(names.contains(&"src".to_string()));
        assert!(!names.contains(&".hidden-notes".to_string()));
    }

    /// # Allowed Hidden Entries
    ///
    /// Verifies that detection-relevant hidden entries are reported.
    ///
    /// ## Test Scenario
    /// - Creates `.env` and `.vscode` alongside `.git`
    ///
    /// ## Expected Outcome
    /// - `.env` and `.vscode` appear in the listing, `.git` does not
    #[test]
    fn test_scan_keeps_allowed_hidden() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
        fs::create_dir(dir.path().join(".vscode")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let scanner = Scanner::new(dir.path());
        let names = scanner.scan().unwrap();

        assert!(names.contains(&".env".to_string()));
        assert!(names.contains(&".vscode".to_string()));
        assert!(!names.contains(&".git".to_string()));
    }

    /// # Missing Directory
    ///
    /// Verifies that scanning a missing path fails with a scan error.
    ///
    /// ## Test Scenario
    /// - Scans a path that does not exist
    ///
    /// ## Expected Outcome
    /// - Returns ScanError::NotFound
    #[test]
    fn test_scan_missing_directory() {
        let scanner = Scanner::new("/definitely/not/a/real/path");
        let err = scanner.scan().unwrap_err();
        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    /// # Scan Target Is a File
    ///
    /// Verifies that scanning a file path fails with a scan error.
    ///
    /// ## Test Scenario
    /// - Points the scanner at a regular file
    ///
    /// ## Expected Outcome
    /// - Returns ScanError::NotADirectory
    #[test]
    fn test_scan_target_is_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "hello").unwrap();

        let scanner = Scanner::new(&file);
        let err = scanner.scan().unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory { .. }));
    }

    /// # Helper Accessors
    ///
    /// Verifies exists and full_path helpers.
    ///
    /// ## Test Scenario
    /// - Creates one file and queries both helpers
    ///
    /// ## Expected Outcome
    /// - exists is true only for present entries; full_path joins the root
    #[test]
    fn test_exists_and_full_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/x").unwrap();

        let scanner = Scanner::new(dir.path());
        assert!(scanner.exists("go.mod"));
        assert!(!scanner.exists("go.sum"));
        assert_eq!(scanner.full_path("go.mod"), dir.path().join("go.mod"));
    }
}
