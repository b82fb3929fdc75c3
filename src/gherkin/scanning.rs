//! File-system scanning for directory models
//!
//! Scanning is separate from parsing: a [`DirectoryScanner`] reads the tree into a
//! [`ScannedDirectory`] of paths and texts, and building parses each text. Tests can hand
//! in a scanner of their own to model a tree without touching the disk.

use crate::gherkin::ast::error::ModelError;
use crate::gherkin::config::ScanningConfig;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One feature document found by a scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDocument {
    pub path: PathBuf,
    pub text: String,
}

/// The documents directly in a directory and its sub-directories, in file name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedDirectory {
    pub path: PathBuf,
    pub documents: Vec<ScannedDocument>,
    pub directories: Vec<ScannedDirectory>,
}

pub trait DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<ScannedDirectory, ModelError>;
}

/// Scans the real file system, keeping files with one extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsScanner {
    extension: String,
}

impl FsScanner {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &ScanningConfig) -> Self {
        Self::new(config.extension.clone())
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|extension| extension == self.extension.as_str())
    }
}

impl Default for FsScanner {
    fn default() -> Self {
        Self::new("feature")
    }
}

impl DirectoryScanner for FsScanner {
    fn scan(&self, root: &Path) -> Result<ScannedDirectory, ModelError> {
        let mut scanned = ScannedDirectory {
            path: root.to_path_buf(),
            ..ScannedDirectory::default()
        };

        let entries = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_dir() {
                scanned.directories.push(self.scan(path)?);
            } else if entry.file_type().is_file() && self.is_document(path) {
                let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                scanned.documents.push(ScannedDocument {
                    path: path.to_path_buf(),
                    text,
                });
            }
        }

        tracing::debug!(
            path = %root.display(),
            documents = scanned.documents.len(),
            directories = scanned.directories.len(),
            "scanned directory"
        );
        Ok(scanned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scans_in_file_name_order() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("b.feature"), "Feature: b").unwrap();
        fs::write(root.path().join("a.feature"), "Feature: a").unwrap();
        fs::write(root.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(root.path().join("nested")).unwrap();
        fs::write(root.path().join("nested").join("c.feature"), "Feature: c").unwrap();

        let scanned = FsScanner::default().scan(root.path()).unwrap();

        let names: Vec<_> = scanned
            .documents
            .iter()
            .map(|doc| doc.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.feature", "b.feature"]);
        assert_eq!(scanned.documents[0].text, "Feature: a");
        assert_eq!(scanned.directories.len(), 1);
        assert_eq!(scanned.directories[0].documents[0].text, "Feature: c");
    }

    #[test]
    fn test_custom_extension() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("one.story"), "Feature: s").unwrap();
        fs::write(root.path().join("two.feature"), "Feature: f").unwrap();

        let scanned = FsScanner::new("story").scan(root.path()).unwrap();
        assert_eq!(scanned.documents.len(), 1);
        assert!(scanned.documents[0].path.ends_with("one.story"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("gone");
        assert!(matches!(
            FsScanner::default().scan(&missing),
            Err(ModelError::Scan(_))
        ));
    }
}
