//! Doc string element
//!
//!     A multi-line string passed to a step, delimited by `"""` lines. The opening
//!     delimiter may carry a content type. Content lines are stored without the indentation
//!     of the delimiter; a `"""` inside the content is written escaped as `\"\"\"`.
//!
//! Examples:
//!
//!     Given the following json:
//!       """json
//!       { "name": "alice" }
//!       """

use super::super::error::ParseError;
use super::super::traits::{AstNode, Valued, Visitor};
use super::super::NodeKind;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::records::ArgumentRecord;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone, Default)]
pub struct DocString {
    /// Empty when the delimiter carries no content type
    pub content_type: String,
    pub content: String,
    pub(crate) source: SourceInfo,
}

impl DocString {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::DocString, source)?;
        document
            .feature
            .and_then(|feature| feature.tests.into_iter().next())
            .and_then(|test| test.steps.into_iter().next())
            .and_then(|step| match step.argument {
                Some(ArgumentRecord::DocString(doc_string)) => {
                    Some(building::doc_string(doc_string))
                }
                _ => None,
            })
            .ok_or_else(|| Fragment::DocString.missing())
    }
}

impl AstNode for DocString {
    fn kind(&self) -> NodeKind {
        NodeKind::DocString
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_doc_string(self);
    }

    fn as_valued(&self) -> Option<&dyn Valued> {
        Some(self)
    }
}

impl Valued for DocString {
    fn value(&self) -> &str {
        &self.content
    }
}

structural_eq!(DocString => [DocString, super::cell::Cell, super::comment::Comment]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_string_from_source() {
        let doc_string = DocString::from_source("\"\"\" text\nsome text\n\n  more\n\"\"\"").unwrap();
        assert_eq!(doc_string.content_type, "text");
        assert_eq!(doc_string.content, "some text\n\n  more");
        assert_eq!(doc_string.source_line(), Some(4));
    }

    #[test]
    fn test_doc_string_output() {
        let doc_string = DocString::new("a\n\"\"\"quoted\"\"\"\nb").with_content_type("md");
        assert_eq!(
            doc_string.to_text(),
            "\"\"\"md\na\n\\\"\\\"\\\"quoted\\\"\\\"\\\"\nb\n\"\"\""
        );
    }

    #[test]
    fn test_empty_doc_string_output() {
        assert_eq!(DocString::default().to_text(), "\"\"\"\n\"\"\"");
    }

    #[test]
    fn test_escaped_delimiters_round_trip() {
        let doc_string = DocString::new("say \"\"\" twice");
        let again = DocString::from_source(&doc_string.to_text()).unwrap();
        assert_eq!(again.content, "say \"\"\" twice");
    }
}
