//! Example element
//!
//!     An example binds data to an outline. Its first row is the parameter row, naming the
//!     substitution variables; every following row is an argument row producing one test
//!     case. All rows of an example are aligned together on output.
//!
//! Row mutation
//!
//!     [`Example::add_row`] and [`Example::remove_row`] accept a positional sequence or a
//!     mapping keyed by parameter name (see [row_data](crate::gherkin::ast::row_data)).
//!     Adding requires a parameter row. Removing never touches the parameter row and is a
//!     no-op when nothing matches.
//!
//! Examples:
//!
//!     @fast
//!     Examples: small numbers
//!       | start | eat |
//!       | 12    | 5   |

use super::super::error::{ModelError, ParseError};
use super::super::node_ref::NodeRef;
use super::super::row_data::IntoRowData;
use super::super::traits::{AstNode, Containing, Described, Named, TableHolder, Tagged, Visitor};
use super::super::NodeKind;
use super::row::Row;
use super::tag::Tag;
use super::{source_accessors, SourceInfo};
use crate::gherkin::ast::equality::structural_eq;
use crate::gherkin::building;
use crate::gherkin::parsing::{Fragment, Parser};

#[derive(Debug, Clone)]
pub struct Example {
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    /// Parameter row first, then argument rows
    pub rows: Vec<Row>,
    pub(crate) source: SourceInfo,
}

impl Default for Example {
    fn default() -> Self {
        Self {
            keyword: "Examples".to_string(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            rows: Vec::new(),
            source: SourceInfo::default(),
        }
    }
}

impl Example {
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Self::from_source_with(source, &Parser::default())
    }

    pub fn from_source_with(source: &str, parser: &Parser) -> Result<Self, ParseError> {
        let document = parser.parse_fragment(Fragment::Example, source)?;
        document
            .feature
            .and_then(|feature| feature.tests.into_iter().next())
            .and_then(|test| test.examples.into_iter().next())
            .map(building::example)
            .ok_or_else(|| Fragment::Example.missing())
    }

    pub fn parameter_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Parameter names, empty when there is no parameter row
    pub fn parameters(&self) -> Vec<&str> {
        self.parameter_row().map(Row::values).unwrap_or_default()
    }

    pub fn argument_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn argument_rows_mut(&mut self) -> &mut [Row] {
        self.rows.get_mut(1..).unwrap_or_default()
    }

    /// Append an argument row
    ///
    /// Fails with [`ModelError::InvalidRowData`] for data that is neither a sequence nor a
    /// mapping, and with [`ModelError::NoParameters`] when no parameter row exists. The
    /// example is left untouched on failure.
    pub fn add_row(&mut self, data: impl IntoRowData) -> Result<(), ModelError> {
        let data = data.into_row_data()?;
        let parameters = self.parameters();
        if parameters.is_empty() {
            return Err(ModelError::NoParameters);
        }

        let values = data.values_for(&parameters);
        tracing::debug!(example = %self.name, ?values, "adding example row");
        self.rows.push(Row::from_values(values));
        Ok(())
    }

    /// Remove the first argument row matching the data
    ///
    /// Returns whether a row was removed. The parameter row is never removed.
    pub fn remove_row(&mut self, data: impl IntoRowData) -> Result<bool, ModelError> {
        let data = data.into_row_data()?;
        if self.rows.len() < 2 {
            return Ok(false);
        }

        let values = data.values_for(&self.parameters());
        let position = self
            .argument_rows()
            .iter()
            .position(|row| row.values() == values);

        match position {
            Some(index) => {
                tracing::debug!(example = %self.name, ?values, "removing example row");
                self.rows.remove(index + 1);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl AstNode for Example {
    fn kind(&self) -> NodeKind {
        NodeKind::Example
    }

    source_accessors!();

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_example(self);
        for row in &self.rows {
            row.accept(visitor);
        }
        visitor.leave_example(self);
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

    fn as_table_holder(&self) -> Option<&dyn TableHolder> {
        Some(self)
    }
}

impl Named for Example {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Described for Example {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Tagged for Example {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl TableHolder for Example {
    fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl Containing for Example {
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.rows
            .iter()
            .map(NodeRef::from)
            .chain(self.tags.iter().map(NodeRef::from))
            .collect()
    }
}

structural_eq!(Example => [Example, super::table::Table]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn example_with_rows() -> Example {
        Example::from_source("Examples:\n|param1|param2|\n|value1|value2|").unwrap()
    }

    #[test]
    fn test_add_row_from_mapping_in_any_order() {
        let mut example = example_with_rows();
        let mut row = HashMap::new();
        row.insert("param2", "value4");
        row.insert("param1", "value3");

        example.add_row(row).unwrap();

        assert_eq!(
            example.values()[1..],
            [vec!["value1", "value2"], vec!["value3", "value4"]]
        );
    }

    #[test]
    fn test_add_row_from_sequence_converts_and_trims() {
        let mut example = example_with_rows();
        example.add_row(vec![" value3 ", "value4  "]).unwrap();
        example.add_row([1, 2]).unwrap();
        example.add_row(json!([true, 3.5])).unwrap();

        assert_eq!(
            example.values()[1..],
            [
                vec!["value1", "value2"],
                vec!["value3", "value4"],
                vec!["1", "2"],
                vec!["true", "3.5"],
            ]
        );
    }

    #[test]
    fn test_add_row_without_parameters() {
        let mut example = Example::default();
        let err = example.add_row(vec!["a"]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Cannot add a row. No parameters have been set."
        );
        assert!(example.rows.is_empty());
    }

    #[test]
    fn test_add_row_rejects_other_shapes() {
        let mut example = example_with_rows();
        let err = example.add_row(json!("a string")).unwrap_err();

        assert!(matches!(err, ModelError::InvalidRowData(_)));
        assert_eq!(example.rows.len(), 2);
    }

    #[test]
    fn test_remove_row_never_removes_parameters() {
        let mut example = example_with_rows();

        assert!(!example.remove_row(vec!["param1", "param2"]).unwrap());
        assert!(example.remove_row(vec![" value1", "value2 "]).unwrap());
        assert_eq!(example.parameters(), vec!["param1", "param2"]);
        assert!(example.argument_rows().is_empty());
    }

    #[test]
    fn test_remove_row_by_mapping() {
        let mut example = example_with_rows();
        example.add_row(vec!["value3", "value4"]).unwrap();

        let removed = example
            .remove_row(json!({"param2": "value4", "param1": "value3"}))
            .unwrap();

        assert!(removed);
        assert_eq!(example.values()[1..], [vec!["value1", "value2"]]);
    }

    #[test]
    fn test_remove_row_on_empty_rows_is_a_noop() {
        let mut example = Example::default();
        assert!(!example.remove_row(vec!["a"]).unwrap());
        assert!(example.remove_row(json!(7)).is_err());
    }

    #[test]
    fn test_example_output() {
        let example = Example::from_source(
            "@tag1\n@tag2 @tag3\nExamples: with everything it could have\nSome description.\nSome more description.\n|param1|param2|\n|value1|value2|\n|value3|value4|",
        )
        .unwrap();

        assert_eq!(
            example.to_text().split('\n').collect::<Vec<_>>(),
            vec![
                "@tag1 @tag2 @tag3",
                "Examples: with everything it could have",
                "",
                "Some description.",
                "Some more description.",
                "",
                "  | param1 | param2 |",
                "  | value1 | value2 |",
                "  | value3 | value4 |",
            ]
        );
    }

    #[test]
    fn test_special_characters_are_escaped_before_alignment() {
        let example = Example::from_source(
            "Examples:\n  | param with \\| |\n  | a value with \\| and \\\\ |\n  | a value with \\\\ |",
        )
        .unwrap();

        assert_eq!(
            example.to_text().split('\n').collect::<Vec<_>>(),
            vec![
                "Examples:",
                "  | param with \\|          |",
                "  | a value with \\| and \\\\ |",
                "  | a value with \\\\        |",
            ]
        );
    }

    #[test]
    fn test_example_source_line() {
        let example = Example::from_source("Examples:").unwrap();
        assert_eq!(example.source_line(), Some(4));
        assert_eq!(example.to_text(), "Examples:");
    }
}
