//! Tag element
//!
//!     Tags label features, scenarios, outlines and examples. They are written on the lines
//!     directly above the titled line they annotate, and the name keeps its `@`.
//!
//! Examples:
//!
//!     @smoke @slow
//!     Scenario: a tagged scenario

use super::super::error::ParseError;
use super::super::traits::{AstNode, Named, Visitor};
use super::super::NodeKind;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone, Default)]
pub struct Tag {
    pub name: String,
    pub(crate) source: SourceInfo,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: SourceInfo::default(),
        }
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Tag, source)?;
        document
            .feature
            .and_then(|feature| feature.tags.into_iter().next())
            .map(building::tag)
            .ok_or_else(|| Fragment::Tag.missing())
    }
}

impl AstNode for Tag {
    fn kind(&self) -> NodeKind {
        NodeKind::Tag
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_tag(self);
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }
}

impl Named for Tag {
    fn name(&self) -> &str {
        &self.name
    }
}

structural_eq!(Tag => [Tag, super::step::Step]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_source() {
        let tag = Tag::from_source("@a_tag").unwrap();
        assert_eq!(tag.name, "@a_tag");
        assert_eq!(tag.source_line(), Some(1));
        assert_eq!(tag.to_text(), "@a_tag");
    }

    #[test]
    fn test_tag_requires_at_sign() {
        let err = Tag::from_source("not_a_tag").unwrap_err();
        assert_eq!(err.file_name(), "stand_alone_tag.feature");
    }
}
