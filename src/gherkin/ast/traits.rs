//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the traits shared by every node kind: [`AstNode`] for identity,
//! source information and traversal, the capability traits that describe what a node
//! can do, and the [`Visitor`] used by the formatters.

use super::elements::{
    Background, Cell, Comment, Directory, DocString, Example, Feature, FeatureFile, Outline, Row,
    Scenario, Step, Table, Tag,
};
use super::node_ref::{NodeKind, NodeRef};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Visitor trait for traversing the tree
///
/// Implement this trait to walk a node and its body. Each visit method corresponds to a
/// node kind. Default implementations are empty, so you only need to override the methods
/// you care about.
///
/// Traversal covers the body of a node only: tags and comments are never visited as
/// children, they belong to the node that owns them.
///
/// # Example
///
/// ```ignore
/// struct StepCounter(usize);
///
/// impl Visitor for StepCounter {
///     fn visit_step(&mut self, _step: &Step) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = StepCounter(0);
/// feature.accept(&mut counter);
/// ```
pub trait Visitor {
    // Containers of documents
    fn visit_directory(&mut self, _directory: &Directory) {}
    fn leave_directory(&mut self, _directory: &Directory) {}

    fn visit_feature_file(&mut self, _feature_file: &FeatureFile) {}
    fn leave_feature_file(&mut self, _feature_file: &FeatureFile) {}

    // Titled sections
    fn visit_feature(&mut self, _feature: &Feature) {}
    fn leave_feature(&mut self, _feature: &Feature) {}

    fn visit_background(&mut self, _background: &Background) {}
    fn leave_background(&mut self, _background: &Background) {}

    fn visit_scenario(&mut self, _scenario: &Scenario) {}
    fn leave_scenario(&mut self, _scenario: &Scenario) {}

    fn visit_outline(&mut self, _outline: &Outline) {}
    fn leave_outline(&mut self, _outline: &Outline) {}

    fn visit_example(&mut self, _example: &Example) {}
    fn leave_example(&mut self, _example: &Example) {}

    // Steps and their arguments
    fn visit_step(&mut self, _step: &Step) {}
    fn leave_step(&mut self, _step: &Step) {}

    fn visit_table(&mut self, _table: &Table) {}
    fn leave_table(&mut self, _table: &Table) {}

    fn visit_doc_string(&mut self, _doc_string: &DocString) {}

    fn visit_row(&mut self, _row: &Row) {}
    fn leave_row(&mut self, _row: &Row) {}

    // Leaves
    fn visit_cell(&mut self, _cell: &Cell) {}
    fn visit_tag(&mut self, _tag: &Tag) {}
    fn visit_comment(&mut self, _comment: &Comment) {}
}

/// The capability traits a node kind may implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Named,
    Described,
    Tagged,
    Stepped,
    Containing,
    TableHolder,
    Valued,
}

/// Common interface for all nodes
pub trait AstNode: fmt::Debug {
    fn kind(&self) -> NodeKind;

    /// One-based line the node started on, when it was built from source text
    fn source_line(&self) -> Option<usize>;

    /// The raw record the parsing adapter produced for this node
    fn parsing_data(&self) -> Option<&Value>;

    /// Accept a visitor for traversing this node and its body
    fn accept(&self, visitor: &mut dyn Visitor);

    fn as_named(&self) -> Option<&dyn Named> {
        None
    }
    fn as_described(&self) -> Option<&dyn Described> {
        None
    }
    fn as_tagged(&self) -> Option<&dyn Tagged> {
        None
    }
    fn as_stepped(&self) -> Option<&dyn Stepped> {
        None
    }
    fn as_containing(&self) -> Option<&dyn Containing> {
        None
    }
    fn as_table_holder(&self) -> Option<&dyn TableHolder> {
        None
    }
    fn as_valued(&self) -> Option<&dyn Valued> {
        None
    }

    /// The set of capabilities this node implements
    fn capabilities(&self) -> BTreeSet<Capability> {
        let mut capabilities = BTreeSet::new();
        if self.as_named().is_some() {
            capabilities.insert(Capability::Named);
        }
        if self.as_described().is_some() {
            capabilities.insert(Capability::Described);
        }
        if self.as_tagged().is_some() {
            capabilities.insert(Capability::Tagged);
        }
        if self.as_stepped().is_some() {
            capabilities.insert(Capability::Stepped);
        }
        if self.as_containing().is_some() {
            capabilities.insert(Capability::Containing);
        }
        if self.as_table_holder().is_some() {
            capabilities.insert(Capability::TableHolder);
        }
        if self.as_valued().is_some() {
            capabilities.insert(Capability::Valued);
        }
        capabilities
    }
}

/// A single-line title (a step's text counts as its name)
pub trait Named {
    fn name(&self) -> &str;
}

/// Multi-line free text, already normalized
pub trait Described {
    fn description(&self) -> &str;
}

/// An ordered set of labels
pub trait Tagged {
    fn tags(&self) -> &[Tag];

    fn tag_names(&self) -> Vec<&str> {
        self.tags().iter().map(|tag| tag.name.as_str()).collect()
    }

    fn has_tag(&self, name: &str) -> bool {
        self.tags().iter().any(|tag| tag.name == name)
    }
}

/// An ordered step sequence
pub trait Stepped {
    fn steps(&self) -> &[Step];
}

/// Generic ordered child list used for equality and navigation
pub trait Containing {
    fn children(&self) -> Vec<NodeRef<'_>>;
}

/// A row/cell grid
pub trait TableHolder {
    fn rows(&self) -> &[Row];

    /// The grid as plain cell values
    fn values(&self) -> Vec<Vec<&str>> {
        self.rows()
            .iter()
            .map(|row| row.cells.iter().map(|cell| cell.value.as_str()).collect())
            .collect()
    }
}

/// A single text value
pub trait Valued {
    fn value(&self) -> &str;
}
