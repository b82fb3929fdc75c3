//! Comment element
//!
//!     A comment is a source line starting with `#`. Comments belong to the feature file
//!     they appear in, not to the section around them, and are not part of a feature's
//!     output. The text keeps its `#`.

use super::super::error::ParseError;
use super::super::traits::{AstNode, Valued, Visitor};
use super::super::NodeKind;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone, Default)]
pub struct Comment {
    pub text: String,
    pub(crate) source: SourceInfo,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: SourceInfo::default(),
        }
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Comment, source)?;
        document
            .comments
            .into_iter()
            .next()
            .map(building::comment)
            .ok_or_else(|| Fragment::Comment.missing())
    }
}

impl AstNode for Comment {
    fn kind(&self) -> NodeKind {
        NodeKind::Comment
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_comment(self);
    }

    fn as_valued(&self) -> Option<&dyn Valued> {
        Some(self)
    }
}

impl Valued for Comment {
    fn value(&self) -> &str {
        &self.text
    }
}

structural_eq!(Comment => [Comment, super::cell::Cell, super::doc_string::DocString]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_from_source() {
        let comment = Comment::from_source("# a comment").unwrap();
        assert_eq!(comment.text, "# a comment");
        assert_eq!(comment.source_line(), Some(1));
        assert_eq!(comment.to_text(), "# a comment");
    }

    #[test]
    fn test_missing_comment() {
        let err = Comment::from_source("").unwrap_err();
        assert_eq!(err.file_name(), "stand_alone_comment.feature");
    }
}
