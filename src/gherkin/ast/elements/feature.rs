//! Feature element
//!
//!     The top-level section of a document: a keyword, a name, a description and tags,
//!     followed by an optional background and the tests (scenarios and outlines).
//!
//!     On output the background and every test are indented one level and separated from
//!     what precedes them by exactly one blank line.
//!
//! Examples:
//!
//!     @billing
//!     Feature: Refunds
//!
//!       Customers can return items within 30 days.
//!
//!       Background:
//!         Given a customer with an order
//!
//!       Scenario: a full refund
//!         When the customer returns the order
//!         Then the order is refunded

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Described, Named, Tagged, Visitor};
use super::super::NodeKind;
use super::background::Background;
use super::outline::Outline;
use super::scenario::Scenario;
use super::tag::Tag;
use super::test::Test;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone)]
pub struct Feature {
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub background: Option<Background>,
    pub tests: Vec<Test>,
    pub(crate) source: SourceInfo,
}

impl Default for Feature {
    fn default() -> Self {
        Self {
            keyword: "Feature".to_string(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            background: None,
            tests: Vec::new(),
            source: SourceInfo::default(),
        }
    }
}

impl Feature {
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Feature, source)?;
        document
            .feature
            .map(building::feature)
            .ok_or_else(|| Fragment::Feature.missing())
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    pub fn scenarios(&self) -> Vec<&Scenario> {
        self.tests.iter().filter_map(Test::as_scenario).collect()
    }

    pub fn outlines(&self) -> Vec<&Outline> {
        self.tests.iter().filter_map(Test::as_outline).collect()
    }

    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    /// Scenarios count once, outlines once per argument row of each example
    pub fn test_case_count(&self) -> usize {
        self.tests.iter().map(Test::test_case_count).sum()
    }
}

impl AstNode for Feature {
    fn kind(&self) -> NodeKind {
        NodeKind::Feature
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_feature(self);
        if let Some(background) = &self.background {
            background.accept(visitor);
        }
        for test in &self.tests {
            test.as_node().accept(visitor);
        }
        visitor.leave_feature(self);
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

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }
}

impl Named for Feature {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Described for Feature {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Tagged for Feature {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl Containing for Feature {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.background
            .iter()
            .map(NodeRef::from)
            .chain(self.tests.iter().map(Test::as_node_ref))
            .chain(self.tags.iter().map(NodeRef::from))
            .collect()
    }
}

structural_eq!(Feature => [Feature]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gherkin::ast::{Example, Row, Step};

    #[test]
    fn test_feature_from_source() {
        let feature = Feature::from_source(
            "@a_tag\nFeature: test feature\n\n  Feature\n  description\n\n  Background:\n    * a step\n\n  Scenario: first\n    * a step\n\n  Scenario Outline: second\n    * a <thing>\n\n  Examples:\n    | thing |\n    | a     |\n    | b     |",
        )
        .unwrap();

        assert_eq!(feature.name, "test feature");
        assert_eq!(feature.description, "Feature\ndescription");
        assert_eq!(feature.tag_names(), vec!["@a_tag"]);
        assert!(feature.has_background());
        assert_eq!(feature.scenarios().len(), 1);
        assert_eq!(feature.outlines().len(), 1);
        assert_eq!(feature.test_count(), 2);
        assert_eq!(feature.test_case_count(), 3);
        assert_eq!(feature.source_line(), Some(2));
    }

    #[test]
    fn test_feature_output_from_abstract_instantiation() {
        let mut outline = Outline {
            name: "an outline".to_string(),
            steps: vec![Step::new("Given", "a <param>")],
            ..Outline::default()
        };
        outline.examples.push(Example {
            rows: vec![Row::from_values(["param"]), Row::from_values(["value"])],
            ..Example::default()
        });
        let feature = Feature {
            name: "built by hand".to_string(),
            background: Some(Background {
                steps: vec![Step::new("*", "setup")],
                ..Background::default()
            }),
            tests: vec![
                Scenario {
                    name: "a scenario".to_string(),
                    steps: vec![Step::new("When", "it runs")],
                    ..Scenario::default()
                }
                .into(),
                outline.into(),
            ],
            ..Feature::default()
        };

        assert_eq!(
            feature.to_text().split('\n').collect::<Vec<_>>(),
            vec![
                "Feature: built by hand",
                "",
                "  Background:",
                "    * setup",
                "",
                "  Scenario: a scenario",
                "    When it runs",
                "",
                "  Scenario Outline: an outline",
                "    Given a <param>",
                "",
                "    Examples:",
                "      | param |",
                "      | value |",
            ]
        );
    }

    #[test]
    fn test_feature_description_is_followed_by_one_blank_line() {
        let feature = Feature {
            description: "Some text.".to_string(),
            tests: vec![Scenario::default().into()],
            ..Feature::default()
        };
        assert_eq!(feature.to_text(), "Feature:\n\nSome text.\n\n  Scenario:");
    }

    #[test]
    fn test_missing_feature() {
        let err = Feature::from_source("# only a comment").unwrap_err();
        assert!(matches!(err, ParseError::Missing { .. }));
        assert_eq!(err.file_name(), "stand_alone_feature.feature");
    }
}
