//! Scenario element
//!
//!     One concrete test case: a keyword, a name, an optional description, tags and steps.
//!
//! Examples:
//!
//!     @smoke
//!     Scenario: logging in
//!       Given a user named "alice"
//!       When she logs in
//!       Then she sees her dashboard

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Described, Named, Stepped, Tagged, Visitor};
use super::super::NodeKind;
use super::background::Background;
use super::outline::Outline;
use super::step::Step;
use super::tag::Tag;
use super::test::Test;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub steps: Vec<Step>,
    pub(crate) source: SourceInfo,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            keyword: "Scenario".to_string(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            steps: Vec::new(),
            source: SourceInfo::default(),
        }
    }
}

impl Scenario {
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        match parser.parse_test_fragment(Fragment::Scenario, source)? {
            Test::Scenario(scenario) => Ok(scenario),
            Test::Outline(_) => Err(Fragment::Scenario.missing()),
        }
    }
}

impl AstNode for Scenario {
    fn kind(&self) -> NodeKind {
        NodeKind::Scenario
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_scenario(self);
        for step in &self.steps {
            step.accept(visitor);
        }
        visitor.leave_scenario(self);
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

impl Named for Scenario {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Described for Scenario {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Tagged for Scenario {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl Stepped for Scenario {
    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Containing for Scenario {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.steps
            .iter()
            .map(NodeRef::from)
            .chain(self.tags.iter().map(NodeRef::from))
            .collect()
    }
}

structural_eq!(Scenario => [Scenario, Background, Outline]);
