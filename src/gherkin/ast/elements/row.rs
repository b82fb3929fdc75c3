//! Row element
//!
//!     A row is one line of a table, in a step's data table or in an example. Output of a
//!     row on its own is unpadded (`| a | b |`); inside a table or an example every row is
//!     padded to the widest value of each column.

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, Visitor};
use super::super::NodeKind;
use super::cell::Cell;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub(crate) source: SourceInfo,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            source: SourceInfo::default(),
        }
    }

    pub fn from_values<V: Into<String>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::new(values.into_iter().map(Cell::new).collect())
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Row, source)?;
        document
            .feature
            .and_then(|feature| feature.tests.into_iter().next())
            .and_then(|test| test.examples.into_iter().next())
            .and_then(|example| example.rows.into_iter().next())
            .map(building::row)
            .ok_or_else(|| Fragment::Row.missing())
    }

    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.value.as_str()).collect()
    }
}

impl AstNode for Row {
    fn kind(&self) -> NodeKind {
        NodeKind::Row
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_row(self);
        for cell in &self.cells {
            cell.accept(visitor);
        }
        visitor.leave_row(self);
    }

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }
}

impl Containing for Row {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.cells.iter().map(NodeRef::from).collect()
    }
}

structural_eq!(Row => [Row]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_source() {
        let row = Row::from_source("| multiple | cell | row |").unwrap();
        assert_eq!(row.values(), vec!["multiple", "cell", "row"]);
        assert_eq!(row.source_line(), Some(5));
        assert!(row.parsing_data().is_some());
    }

    #[test]
    fn test_row_output_is_unpadded() {
        let row = Row::from_values(["a", "longer value", r"pipe|"]);
        assert_eq!(row.to_text(), r"| a | longer value | pipe\| |");
    }

    #[test]
    fn test_row_parse_error_names_synthetic_file() {
        let err = Row::from_source("| a | b |\n| c |").unwrap_err();
        assert_eq!(err.file_name(), "stand_alone_row.feature");
    }
}
