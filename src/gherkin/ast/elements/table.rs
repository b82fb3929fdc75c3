//! Table element
//!
//!     A data table passed to a step. Rows are written one per line, indented one level
//!     below the step, with every column padded to its widest (escaped) value.
//!
//! Examples:
//!
//!     Given the following users:
//!       | name  | role  |
//!       | alice | admin |

use super::super::error::ParseError;
use super::super::node_ref::NodeRef;
use super::super::traits::{AstNode, Containing, TableHolder, Visitor};
use super::super::NodeKind;
use super::row::Row;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::records::ArgumentRecord;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<Row>,
    pub(crate) source: SourceInfo,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            source: SourceInfo::default(),
        }
    }

    pub fn from_values<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::new(rows.into_iter().map(Row::from_values).collect())
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Table, source)?;
        document
            .feature
            .and_then(|feature| feature.tests.into_iter().next())
            .and_then(|test| test.steps.into_iter().next())
            .and_then(|step| match step.argument {
                Some(ArgumentRecord::Table(table)) => Some(building::table(table)),
                _ => None,
            })
            .ok_or_else(|| Fragment::Table.missing())
    }
}

impl AstNode for Table {
    fn kind(&self) -> NodeKind {
        NodeKind::Table
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_table(self);
        for row in &self.rows {
            row.accept(visitor);
        }
        visitor.leave_table(self);
    }

    fn as_containing(&self) -> Option<&dyn Containing> {
        Some(self)
    }

    fn as_table_holder(&self) -> Option<&dyn TableHolder> {
        Some(self)
    }
}

impl Containing for Table {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.rows.iter().map(NodeRef::from).collect()
    }
}

impl TableHolder for Table {
    fn rows(&self) -> &[Row] {
        &self.rows
    }
}

structural_eq!(Table => [Table, super::example::Example]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_source() {
        let table = Table::from_source("| a | b |\n| c | d |").unwrap();
        assert_eq!(table.values(), vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(table.source_line(), Some(4));
    }

    #[test]
    fn test_table_output_is_aligned() {
        let table = Table::from_values([["parameter 1", "x"], ["y", "value 1"], ["a", "b"]]);
        assert_eq!(
            table.to_text(),
            [
                "| parameter 1 | x       |",
                "| y           | value 1 |",
                "| a           | b       |",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_table_requires_rows() {
        let err = Table::from_source("").unwrap_err();
        assert_eq!(err.file_name(), "stand_alone_table.feature");
    }
}
