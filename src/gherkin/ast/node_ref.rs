//! Borrowed, kind-tagged node references
//!
//! [`NodeRef`] is what generic traversal hands out: `Containing::children()` returns them,
//! the [`Cursor`](super::Cursor) chains them, and the treeviz formatter walks them.

use super::elements::{
    Background, Cell, Comment, Directory, DocString, Example, Feature, FeatureFile, Outline, Row,
    Scenario, Step, Table, Tag,
};
use super::traits::AstNode;
use std::fmt;

/// The concrete node kinds, used to filter ancestor lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    FeatureFile,
    Feature,
    Background,
    Scenario,
    Outline,
    Example,
    Step,
    Table,
    DocString,
    Row,
    Cell,
    Tag,
    Comment,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Directory => "directory",
            NodeKind::FeatureFile => "feature_file",
            NodeKind::Feature => "feature",
            NodeKind::Background => "background",
            NodeKind::Scenario => "scenario",
            NodeKind::Outline => "outline",
            NodeKind::Example => "example",
            NodeKind::Step => "step",
            NodeKind::Table => "table",
            NodeKind::DocString => "doc_string",
            NodeKind::Row => "row",
            NodeKind::Cell => "cell",
            NodeKind::Tag => "tag",
            NodeKind::Comment => "comment",
        }
    }

    /// Test kinds are the ones a feature runs: scenarios and outlines
    pub fn is_test(&self) -> bool {
        matches!(self, NodeKind::Scenario | NodeKind::Outline)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed reference to any node
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Directory(&'a Directory),
    FeatureFile(&'a FeatureFile),
    Feature(&'a Feature),
    Background(&'a Background),
    Scenario(&'a Scenario),
    Outline(&'a Outline),
    Example(&'a Example),
    Step(&'a Step),
    Table(&'a Table),
    DocString(&'a DocString),
    Row(&'a Row),
    Cell(&'a Cell),
    Tag(&'a Tag),
    Comment(&'a Comment),
}

impl<'a> NodeRef<'a> {
    pub fn as_node(self) -> &'a dyn AstNode {
        match self {
            NodeRef::Directory(node) => node,
            NodeRef::FeatureFile(node) => node,
            NodeRef::Feature(node) => node,
            NodeRef::Background(node) => node,
            NodeRef::Scenario(node) => node,
            NodeRef::Outline(node) => node,
            NodeRef::Example(node) => node,
            NodeRef::Step(node) => node,
            NodeRef::Table(node) => node,
            NodeRef::DocString(node) => node,
            NodeRef::Row(node) => node,
            NodeRef::Cell(node) => node,
            NodeRef::Tag(node) => node,
            NodeRef::Comment(node) => node,
        }
    }

    pub fn kind(self) -> NodeKind {
        self.as_node().kind()
    }

    /// Immediate ordered sub-elements; empty for leaves
    pub fn children(self) -> Vec<NodeRef<'a>> {
        self.as_node()
            .as_containing()
            .map(|containing| containing.children())
            .unwrap_or_default()
    }

    /// Whether both references point at the same node in memory
    pub fn ptr_eq(self, other: NodeRef<'_>) -> bool {
        self.is(other.as_node())
    }

    /// Whether this reference points at `node`
    pub fn is(self, node: &dyn AstNode) -> bool {
        std::ptr::addr_eq(self.as_node(), node) && self.kind() == node.kind()
    }

    /// Short human label used by the treeviz formatter
    pub fn label(self) -> String {
        let node = self.as_node();
        if let Some(named) = node.as_named() {
            return named.name().to_string();
        }
        if let Some(valued) = node.as_valued() {
            return valued.value().to_string();
        }
        match self {
            NodeRef::Directory(directory) => directory.path.display().to_string(),
            NodeRef::FeatureFile(file) => file.path.display().to_string(),
            NodeRef::Table(table) => format!("{} rows", table.rows.len()),
            NodeRef::Row(row) => row.values().join(" | "),
            _ => String::new(),
        }
    }
}

macro_rules! node_ref_from {
    ($($kind:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $kind> for NodeRef<'a> {
                fn from(node: &'a $kind) -> Self {
                    NodeRef::$kind(node)
                }
            }
        )*
    };
}

node_ref_from!(
    Directory,
    FeatureFile,
    Feature,
    Background,
    Scenario,
    Outline,
    Example,
    Step,
    Table,
    DocString,
    Row,
    Cell,
    Tag,
    Comment,
);
