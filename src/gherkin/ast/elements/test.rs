//! A feature's test: a scenario or an outline

use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Tagged};
use super::outline::Outline;
use super::scenario::Scenario;
use super::step::Step;
use super::tag::Tag;

#[derive(Debug, Clone)]
pub enum Test {
    Scenario(Scenario),
    Outline(Outline),
}

impl Test {
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Test::Scenario(scenario) => NodeRef::Scenario(scenario),
            Test::Outline(outline) => NodeRef::Outline(outline),
        }
    }

    pub fn as_node(&self) -> &dyn AstNode {
        self.as_node_ref().as_node()
    }

    pub fn as_scenario(&self) -> Option<&Scenario> {
        match self {
            Test::Scenario(scenario) => Some(scenario),
            Test::Outline(_) => None,
        }
    }

    pub fn as_outline(&self) -> Option<&Outline> {
        match self {
            Test::Outline(outline) => Some(outline),
            Test::Scenario(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Test::Scenario(scenario) => &scenario.name,
            Test::Outline(outline) => &outline.name,
        }
    }

    pub fn steps(&self) -> &[Step] {
        match self {
            Test::Scenario(scenario) => &scenario.steps,
            Test::Outline(outline) => &outline.steps,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            Test::Scenario(scenario) => scenario.tags(),
            Test::Outline(outline) => outline.tags(),
        }
    }

    /// Test cases this test produces: one for a scenario, one per argument row for an outline
    pub fn test_case_count(&self) -> usize {
        match self {
            Test::Scenario(_) => 1,
            Test::Outline(outline) => outline.test_case_count(),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Test::Scenario(scenario) => scenario.to_text(),
            Test::Outline(outline) => outline.to_text(),
        }
    }
}

impl From<Scenario> for Test {
    fn from(scenario: Scenario) -> Self {
        Test::Scenario(scenario)
    }
}

impl From<Outline> for Test {
    fn from(outline: Outline) -> Self {
        Test::Outline(outline)
    }
}

impl PartialEq for Test {
    fn eq(&self, other: &Self) -> bool {
        crate::gherkin::ast::structurally_equal(self.as_node(), other.as_node())
    }
}
