//! Outline element
//!
//!     A templated test case. Its steps refer to parameters (`<name>`) that are filled in
//!     from the rows of its examples, producing one test case per argument row.
//!
//!     Examples are written one level below the outline, after its steps, each preceded
//!     by a blank line.
//!
//! Examples:
//!
//!     Scenario Outline: eating
//!       Given there are <start> cucumbers
//!       When I eat <eat> cucumbers
//!
//!       Examples:
//!         | start | eat |
//!         | 12    | 5   |

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Described, Named, Stepped, Tagged, Visitor};
use super::super::NodeKind;
use super::background::Background;
use super::example::Example;
use super::scenario::Scenario;
use super::step::Step;
use super::tag::Tag;
use super::test::Test;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone)]
pub struct Outline {
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub steps: Vec<Step>,
    pub examples: Vec<Example>,
    pub(crate) source: SourceInfo,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            keyword: "Scenario Outline".to_string(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            steps: Vec::new(),
            examples: Vec::new(),
            source: SourceInfo::default(),
        }
    }
}

impl Outline {
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        match parser.parse_test_fragment(Fragment::Outline, source)? {
            Test::Outline(outline) => Ok(outline),
            Test::Scenario(_) => Err(Fragment::Outline.missing()),
        }
    }

    /// One test case per argument row of every example
    pub fn test_case_count(&self) -> usize {
        self.examples
            .iter()
            .map(|example| example.argument_rows().len())
            .sum()
    }
}

impl AstNode for Outline {
    fn kind(&self) -> NodeKind {
        NodeKind::Outline
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_outline(self);
        for step in &self.steps {
            step.accept(visitor);
        }
        for example in &self.examples {
            example.accept(visitor);
        }
        visitor.leave_outline(self);
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }

    fn as_described(&self) -> Option<&dyn Described> {
        Some(self)
    }

    fn as_tagged(&self) -> Option<&dyn Tagged> {
        Some(self)
    }

    fn as_stepped(&self) -> Option<&dyn Stepped> {
        Some(self)
    }

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }
}

impl Named for Outline {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Described for Outline {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Tagged for Outline {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl Stepped for Outline {
    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Containing for Outline {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.steps
            .iter()
            .map(NodeRef::from)
            .chain(self.examples.iter().map(NodeRef::from))
            .chain(self.tags.iter().map(NodeRef::from))
            .collect()
    }
}

structural_eq!(Outline => [Outline, Background, Scenario]);

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "@outline_tag\nScenario Outline: test outline\n\nOutline\ndescription\n\n  * a <param> step\n\n  @example_tag\n  Examples: first\n    | param |\n    | a     |\n    | b     |\n\n  Examples: second\n    | param |\n    | c     |";

    #[test]
    fn test_outline_from_source() {
        let outline = Outline::from_source(SOURCE).unwrap();

        assert_eq!(outline.keyword, "Scenario Outline");
        assert_eq!(outline.name, "test outline");
        assert_eq!(outline.description, "Outline\ndescription");
        assert_eq!(outline.examples.len(), 2);
        assert_eq!(outline.examples[0].tag_names(), vec!["@example_tag"]);
        assert_eq!(outline.test_case_count(), 3);
        assert_eq!(outline.source_line(), Some(3));
    }

    #[test]
    fn test_outline_output() {
        let outline = Outline::from_source(SOURCE).unwrap();

        assert_eq!(
            outline.to_text().split('\n').collect::<Vec<_>>(),
            vec![
                "@outline_tag",
                "Scenario Outline: test outline",
                "",
                "Outline",
                "description",
                "",
                "  * a <param> step",
                "",
                "  @example_tag",
                "  Examples: first",
                "    | param |",
                "    | a     |",
                "    | b     |",
                "",
                "  Examples: second",
                "    | param |",
                "    | c     |",
            ]
        );
    }

    #[test]
    fn test_outline_output_round_trips() {
        let outline = Outline::from_source(SOURCE).unwrap();
        let again = Outline::from_source(&outline.to_text()).unwrap();
        assert_eq!(again.to_text(), outline.to_text());
    }
}
