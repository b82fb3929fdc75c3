//! Feature file element
//!
//!     One source document on disk. It holds the feature the document defines, if any,
//!     and every comment line of the document. Its text form is its path.

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Visitor};
use super::super::NodeKind;
use super::comment::Comment;
use super::feature::Feature;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct FeatureFile {
    pub path: PathBuf,
    pub feature: Option<Feature>,
    pub comments: Vec<Comment>,
    pub(crate) text: String,
    pub(crate) source: SourceInfo,
}

impl FeatureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Build from the text of the file at `path`; parse errors name the real file
    pub fn from_source(path: impl Into<PathBuf>, text: &str) -> Result<Self, ParseError> {
        Self::from_source_with(path, text, &Parser::default())
    }

    pub fn from_source_with(
        path: impl Into<PathBuf>,
        text: &str,
        parser: &Parser,
    ) -> Result<Self, ParseError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let document = parser.parse_document(text, &file_name)?;
        Ok(building::feature_file(path, text, document))
    }

    /// The file name, without directories
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The text the file was parsed from; empty for files built by hand
    pub fn source(&self) -> &str {
        &self.text
    }

    pub fn has_feature(&self) -> bool {
        self.feature.is_some()
    }
}

impl AstNode for FeatureFile {
    fn kind(&self) -> NodeKind {
        NodeKind::FeatureFile
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_feature_file(self);
        if let Some(feature) = &self.feature {
            feature.accept(visitor);
        }
        visitor.leave_feature_file(self);
    }

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }
}

impl Containing for FeatureFile {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.feature
            .iter()
            .map(NodeRef::from)
            .chain(self.comments.iter().map(NodeRef::from))
            .collect()
    }
}

structural_eq!(FeatureFile => [FeatureFile]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_file_from_source() {
        let file = FeatureFile::from_source(
            "features/refunds.feature",
            "# a comment\nFeature: Refunds\n  # another\n  Scenario: one\n    * a step",
        )
        .unwrap();

        assert_eq!(file.name(), "refunds.feature");
        assert!(file.has_feature());
        assert_eq!(file.comments.len(), 2);
        assert_eq!(file.comments[1].text, "# another");
        assert_eq!(file.to_text(), "features/refunds.feature");
        assert!(file.source().starts_with("# a comment"));
    }

    #[test]
    fn test_empty_file_has_no_feature() {
        let file = FeatureFile::from_source("empty.feature", "").unwrap();
        assert!(!file.has_feature());
    }

    #[test]
    fn test_parse_error_names_real_file() {
        let err = FeatureFile::from_source("dir/broken.feature", "Feature: x\n  Scenario:\n  @dangling")
            .unwrap_err();
        assert_eq!(err.file_name(), "broken.feature");
    }
}
