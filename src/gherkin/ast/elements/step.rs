//! Step element
//!
//!     A step is one action line: a keyword (`Given`, `When`, `Then`, `And`, `But`, `*` or a
//!     dialect's equivalent) followed by text. A step may carry one argument block, a data
//!     table or a doc string, written one level deeper than the step.
//!
//!     The keyword is kept for output but is not part of equality: `Given a user` equals
//!     `And a user`.
//!
//! Examples:
//!
//!     Given a user named "alice"
//!       | role  |
//!       | admin |

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Named, Visitor};
use super::super::NodeKind;
use super::block::Block;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone)]
pub struct Step {
    pub keyword: String,
    pub text: String,
    pub block: Option<Block>,
    pub(crate) source: SourceInfo,
}

impl Default for Step {
    fn default() -> Self {
        Self {
            keyword: "*".to_string(),
            text: String::new(),
            block: None,
            source: SourceInfo::default(),
        }
    }
}

impl Step {
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.block = Some(block.into());
        self
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Step, source)?;
        document
            .feature
            .and_then(|feature| feature.tests.into_iter().next())
            .and_then(|test| test.steps.into_iter().next())
            .map(building::step)
            .ok_or_else(|| Fragment::Step.missing())
    }
}

impl AstNode for Step {
    fn kind(&self) -> NodeKind {
        NodeKind::Step
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_step(self);
        match &self.block {
            Some(Block::Table(table)) => table.accept(visitor),
            Some(Block::DocString(doc_string)) => doc_string.accept(visitor),
            None => {}
        }
        visitor.leave_step(self);
    }

    fn as_named(&self) -> Option<&dyn Named> {
        Some(self)
    }

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }
}

impl Named for Step {
    fn name(&self) -> &str {
        &self.text
    }
}

impl Containing for Step {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.block.iter().map(Block::as_node_ref).collect()
    }
}

structural_eq!(Step => [Step, super::tag::Tag]);
