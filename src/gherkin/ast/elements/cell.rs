//! Cell element
//!
//!     A cell is one value of a table row. In source text cells are separated by pipes,
//!     so a literal pipe inside a value is written `\|`, a literal backslash `\\` and a
//!     newline `\n`. The model stores the unescaped, trimmed value; escaping is applied
//!     again on output.
//!
//! Examples:
//!
//!     | a value | a value with \| and \\ |

use super::super::error::ParseError;
use super::super::traits::{AstNode, Valued, Visitor};
use super::super::NodeKind;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub value: String,
    pub(crate) source: SourceInfo,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: SourceInfo::default(),
        }
    }

    /// Parse a single cell value, escapes included
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Cell, source)?;
        document
            .feature
            .and_then(|feature| feature.tests.into_iter().next())
            .and_then(|test| test.examples.into_iter().next())
            .and_then(|example| example.rows.into_iter().next())
            .and_then(|row| row.cells.into_iter().next())
            .map(building::cell)
            .ok_or_else(|| Fragment::Cell.missing())
    }
}

impl AstNode for Cell {
    fn kind(&self) -> NodeKind {
        NodeKind::Cell
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_cell(self);
    }

    fn as_valued(&self) -> Option<&dyn Valued> {
        Some(self)
    }
}

impl Valued for Cell {
    fn value(&self) -> &str {
        &self.value
    }
}

structural_eq!(Cell => [Cell, super::doc_string::DocString, super::comment::Comment]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_source_unescapes() {
        let cell = Cell::from_source(r"a \| b \\ c").unwrap();
        assert_eq!(cell.value, r"a | b \ c");
        assert_eq!(cell.source_line(), Some(5));
    }

    #[test]
    fn test_cell_output_escapes() {
        let cell = Cell::new(r"a | b \ c");
        assert_eq!(cell.to_text(), r"a \| b \\ c");
    }

    #[test]
    fn test_cell_round_trip() {
        let cell = Cell::from_source(r"with \| pipe").unwrap();
        let again = Cell::from_source(&cell.to_text()).unwrap();
        assert_eq!(again.to_text(), cell.to_text());
        assert_eq!(again, cell);
    }
}
