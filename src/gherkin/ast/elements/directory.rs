//! Directory element
//!
//!     A file-system scope: the feature files directly inside it and its sub-directories,
//!     both in file name order. A directory is always a root; it is the only node without
//!     a parent. Its text form is its path.
//!
//!     Loading goes through a [`DirectoryScanner`], which does the file-system work, and a
//!     [`Parser`] for each document found.

use super::super::error::ModelError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Visitor};
use super::super::NodeKind;
use super::feature_file::FeatureFile;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::config::ModelConfig;
use crate::gherkin::parsing::Parser;
use crate::gherkin::scanning::{DirectoryScanner, FsScanner};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub path: PathBuf,
    pub feature_files: Vec<FeatureFile>,
    pub directories: Vec<Directory>,
    pub(crate) source: SourceInfo,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Scan and parse everything under `path` with the default scanner and parser
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::load_with(path, &FsScanner::default(), &Parser::default())
    }

    /// Scan and parse with the scanner and parser a configuration describes
    pub fn load_with_config(
        path: impl AsRef<Path>,
        config: &ModelConfig,
    ) -> Result<Self, ModelError> {
        tracing::debug!(
            extension = %config.scanning.extension,
            dialect = %config.parsing.dialect,
            schema = %config.parsing.schema,
            "loading directory from configuration"
        );
        Self::load_with(
            path,
            &FsScanner::from_config(&config.scanning),
            &Parser::from_config(config),
        )
    }

    pub fn load_with(
        path: impl AsRef<Path>,
        scanner: &dyn DirectoryScanner,
        parser: &Parser,
    ) -> Result<Self, ModelError> {
        let scanned = scanner.scan(path.as_ref())?;
        building::directory(scanned, parser)
    }

    /// The last path component
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn feature_file_count(&self) -> usize {
        self.feature_files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    /// Feature files here and in every sub-directory, depth first
    pub fn all_feature_files(&self) -> Vec<&FeatureFile> {
        let mut files: Vec<&FeatureFile> = self.feature_files.iter().collect();
        for directory in &self.directories {
            files.extend(directory.all_feature_files());
        }
        files
    }
}

impl AstNode for Directory {
    fn kind(&self) -> NodeKind {
        NodeKind::Directory
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_directory(self);
        for file in &self.feature_files {
            file.accept(visitor);
        }
        for directory in &self.directories {
            directory.accept(visitor);
        }
        visitor.leave_directory(self);
    }

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }
}

impl Containing for Directory {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.feature_files
            .iter()
            .map(NodeRef::from)
            .chain(self.directories.iter().map(NodeRef::from))
            .collect()
    }
}

structural_eq!(Directory => [Directory]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_name_and_text() {
        let directory = Directory::new("some/path/features");
        assert_eq!(directory.name(), "features");
        assert_eq!(directory.to_text(), "some/path/features");
    }

    #[test]
    fn test_all_feature_files_recurses() {
        let mut nested = Directory::new("root/nested");
        nested.feature_files.push(FeatureFile::new("root/nested/b.feature"));
        let mut root = Directory::new("root");
        root.feature_files.push(FeatureFile::new("root/a.feature"));
        root.directories.push(nested);

        let names: Vec<String> = root.all_feature_files().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a.feature", "b.feature"]);
        assert_eq!(root.feature_file_count(), 1);
        assert_eq!(root.directory_count(), 1);
    }
}
