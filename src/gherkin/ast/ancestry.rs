//! Cursor based ancestry lookup
//!
//!     Nodes do not store a pointer to their parent. A parent owns its children by value,
//!     and a [`Cursor`] materializes the upward links while it descends from a root: each
//!     cursor holds the node it points at plus the chain of borrowed ancestors it was reached
//!     through. The chain is non-owning, it is fixed by the ownership structure, and it cannot
//!     form a cycle.
//!
//!     Lookups walk the chain from the immediate parent upwards:
//!
//!     ```ignore
//!     let root = Cursor::new(&directory);
//!     let row = root.locate(&some_row).unwrap();
//!     let scenario = row.get_ancestor(NodeKind::Scenario);
//!     ```

use super::node_ref::{NodeKind, NodeRef};
use super::traits::AstNode;

/// A position in a tree together with the ancestors it was reached through
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    node: NodeRef<'a>,
    /// Root first, immediate parent last
    ancestors: Vec<NodeRef<'a>>,
}

impl<'a> Cursor<'a> {
    /// Start at a root; the root has no ancestors
    pub fn new(root: impl Into<NodeRef<'a>>) -> Self {
        Self {
            node: root.into(),
            ancestors: Vec::new(),
        }
    }

    pub fn node(&self) -> NodeRef<'a> {
        self.node
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.ancestors.last().copied()
    }

    /// Ancestors from the immediate parent up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + '_ {
        self.ancestors.iter().rev().copied()
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// The nearest ancestor of the requested kind, if any
    pub fn get_ancestor(&self, kind: NodeKind) -> Option<NodeRef<'a>> {
        self.ancestors().find(|ancestor| ancestor.kind() == kind)
    }

    /// Cursors for the immediate children, in order
    pub fn children(&self) -> Vec<Cursor<'a>> {
        self.node
            .children()
            .into_iter()
            .map(|child| self.descend(child))
            .collect()
    }

    /// This cursor and every cursor below it, depth first
    pub fn descendants(&self) -> Vec<Cursor<'a>> {
        let mut found = Vec::new();
        self.collect_into(&mut found);
        found
    }

    /// The first cursor (depth first, starting here) whose node matches
    pub fn find(&self, predicate: impl Fn(NodeRef<'a>) -> bool) -> Option<Cursor<'a>> {
        self.find_by(&predicate)
    }

    /// The cursor pointing at exactly `target`, located by identity rather than equality
    pub fn locate(&self, target: &dyn AstNode) -> Option<Cursor<'a>> {
        self.find(|node| node.is(target))
    }

    fn find_by(&self, predicate: &dyn Fn(NodeRef<'a>) -> bool) -> Option<Cursor<'a>> {
        if predicate(self.node) {
            return Some(self.clone());
        }
        self.children()
            .into_iter()
            .find_map(|child| child.find_by(predicate))
    }

    fn collect_into(&self, found: &mut Vec<Cursor<'a>>) {
        found.push(self.clone());
        for child in self.children() {
            child.collect_into(found);
        }
    }

    fn descend(&self, child: NodeRef<'a>) -> Cursor<'a> {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(self.node);
        Cursor {
            node: child,
            ancestors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gherkin::ast::{Feature, Row, Scenario, Step, Table, Tag};

    fn sample_feature() -> Feature {
        let mut step = Step::new("Given", "a table");
        step.block = Some(Table::from_values([["a", "b"]]).into());
        let mut scenario = Scenario::default();
        scenario.tags.push(Tag::new("@tagged"));
        scenario.steps.push(step);
        let mut feature = Feature::default();
        feature.tests.push(scenario.into());
        feature
    }

    #[test]
    fn test_get_ancestor_walks_up_the_chain() {
        let feature = sample_feature();
        let root = Cursor::new(&feature);
        let row = root
            .find(|node| node.kind() == NodeKind::Row)
            .expect("row to be found");

        assert_eq!(row.depth(), 4);
        assert_eq!(row.parent().map(|p| p.kind()), Some(NodeKind::Table));
        assert!(row
            .get_ancestor(NodeKind::Feature)
            .expect("feature ancestor")
            .is(&feature));
        assert_eq!(
            row.get_ancestor(NodeKind::Scenario).map(|n| n.kind()),
            Some(NodeKind::Scenario)
        );
        assert!(row.get_ancestor(NodeKind::Outline).is_none());
        assert!(row.get_ancestor(NodeKind::Row).is_none());
    }

    #[test]
    fn test_root_has_no_ancestors() {
        let feature = sample_feature();
        let root = Cursor::new(&feature);
        assert!(root.parent().is_none());
        assert!(root.get_ancestor(NodeKind::Directory).is_none());
    }

    #[test]
    fn test_locate_uses_identity() {
        let feature = sample_feature();
        let target: &Row = match &feature.scenarios()[0].steps[0].block {
            Some(crate::gherkin::ast::Block::Table(table)) => &table.rows[0],
            _ => panic!("expected a table"),
        };
        let located = Cursor::new(&feature).locate(target).expect("row located");
        assert!(located.node().is(target));

        let detached = Row::from_values(["a", "b"]);
        assert!(Cursor::new(&feature).locate(&detached).is_none());
    }

    #[test]
    fn test_tags_are_reachable_children() {
        let feature = sample_feature();
        let tag = Cursor::new(&feature)
            .find(|node| node.kind() == NodeKind::Tag)
            .expect("tag found");
        assert_eq!(tag.parent().map(|p| p.kind()), Some(NodeKind::Scenario));
    }

    #[test]
    fn test_descendants_are_depth_first() {
        let feature = sample_feature();
        let kinds: Vec<NodeKind> = Cursor::new(&feature)
            .descendants()
            .iter()
            .map(|cursor| cursor.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Feature,
                NodeKind::Scenario,
                NodeKind::Step,
                NodeKind::Table,
                NodeKind::Row,
                NodeKind::Cell,
                NodeKind::Cell,
                NodeKind::Tag,
            ]
        );
    }
}
