//! Background element
//!
//!     Setup steps shared by every test of a feature. A background has a keyword, an
//!     optional name and description, and steps. It cannot be tagged.
//!
//! Examples:
//!
//!     Background: a logged in user
//!       Given a user named "alice"
//!       And she is logged in

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Described, Named, Stepped, Visitor};
use super::super::NodeKind;
use super::outline::Outline;
use super::scenario::Scenario;
use super::step::Step;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone)]
pub struct Background {
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<Step>,
    pub(crate) source: SourceInfo,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            keyword: "Background".to_string(),
            name: String::new(),
            description: String::new(),
            steps: Vec::new(),
            source: SourceInfo::default(),
        }
    }
}

impl Background {
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Background, source)?;
        document
            .feature
            .and_then(|feature| feature.background)
            .map(building::background)
            .ok_or_else(|| Fragment::Background.missing())
    }
}

impl AstNode for Background {
    fn kind(&self) -> NodeKind {
        NodeKind::Background
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_background(self);
        for step in &self.steps {
            step.accept(visitor);
        }
        visitor.leave_background(self);
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }

    fn as_described(&self) -> Option<&dyn Described> {
        Some(self)
    }

    fn as_stepped(&self) -> Option<&dyn Stepped> {
        Some(self)
    }

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }
}

impl Named for Background {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Described for Background {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Stepped for Background {
    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Containing for Background {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.steps.iter().map(NodeRef::from).collect()
    }
}

structural_eq!(Background => [Background, Scenario, Outline]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gherkin::ast::{DocString, Table};

    #[test]
    fn test_background_from_source() {
        let background =
            Background::from_source("Background: test background\ndescription\n* a step").unwrap();
        assert_eq!(background.keyword, "Background");
        assert_eq!(background.name, "test background");
        assert_eq!(background.description, "description");
        assert_eq!(background.steps.len(), 1);
        assert_eq!(background.source_line(), Some(2));
    }

    #[test]
    fn test_parse_error_names_synthetic_file() {
        let source = "bad background text \n Background:\n * a step\n @foo ";
        let err = Background::from_source(source).unwrap_err();
        assert!(err.to_string().contains("'stand_alone_background.feature'"));
    }

    #[test]
    fn test_background_output() {
        let background = Background {
            name: "with everything".to_string(),
            description: "Some description.\nSome more description.".to_string(),
            steps: vec![
                Step::new("*", "a step").with_block(Table::from_values([["value"]])),
                Step::new("*", "another step").with_block(DocString::new("some text")),
            ],
            ..Background::default()
        };

        assert_eq!(
            background.to_text().split('\n').collect::<Vec<_>>(),
            vec![
                "Background: with everything",
                "",
                "Some description.",
                "Some more description.",
                "",
                "  * a step",
                "    | value |",
                "  * another step",
                "    \"\"\"",
                "    some text",
                "    \"\"\"",
            ]
        );
    }

    #[test]
    fn test_background_output_without_description() {
        let background = Background {
            steps: vec![Step::new("*", "a step")],
            ..Background::default()
        };
        assert_eq!(background.to_text(), "Background:\n  * a step");
    }

    #[test]
    fn test_default_background_output() {
        assert_eq!(Background::default().to_text(), "Background:");
    }
}
