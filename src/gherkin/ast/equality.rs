//! Capability-intersection structural equality
//!
//!     Two nodes are equal when they share at least one capability and every shared
//!     capability compares equal:
//!
//!         - Named: names
//!         - Described: normalized descriptions
//!         - Tagged: tag name sequences, order-sensitive
//!         - Stepped: step sequences, element-wise with this same comparison
//!         - TableHolder: row sequences, element-wise
//!         - Valued: values
//!         - Containing: child sequences, element-wise
//!
//!     `Stepped` and `TableHolder` are specific views over a node's children. When either
//!     is shared, the generic child comparison is skipped, otherwise a Background could
//!     never equal an Outline (whose children also hold its examples).
//!
//!     Source lines and parsing data never take part.

use super::traits::{AstNode, Capability};

/// Compare two nodes of any kind by shared capabilities
pub fn structurally_equal(left: &dyn AstNode, right: &dyn AstNode) -> bool {
    let shared: Vec<Capability> = left
        .capabilities()
        .intersection(&right.capabilities())
        .copied()
        .collect();
    if shared.is_empty() {
        return false;
    }

    let specific_children = shared
        .iter()
        .any(|capability| matches!(capability, Capability::Stepped | Capability::TableHolder));

    shared.iter().all(|capability| match capability {
        Capability::Named => compare(left.as_named(), right.as_named(), |l, r| l.name() == r.name()),
        Capability::Described => compare(left.as_described(), right.as_described(), |l, r| {
            l.description() == r.description()
        }),
        Capability::Tagged => compare(left.as_tagged(), right.as_tagged(), |l, r| {
            l.tag_names() == r.tag_names()
        }),
        Capability::Stepped => compare(left.as_stepped(), right.as_stepped(), |l, r| {
            pairwise(l.steps(), r.steps())
        }),
        Capability::TableHolder => compare(left.as_table_holder(), right.as_table_holder(), |l, r| {
            pairwise(l.rows(), r.rows())
        }),
        Capability::Valued => compare(left.as_valued(), right.as_valued(), |l, r| {
            l.value() == r.value()
        }),
        Capability::Containing => {
            specific_children
                || compare(left.as_containing(), right.as_containing(), |l, r| {
                    let (l, r) = (l.children(), r.children());
                    l.len() == r.len()
                        && l.iter()
                            .zip(r.iter())
                            .all(|(l, r)| structurally_equal(l.as_node(), r.as_node()))
                })
        }
    })
}

fn compare<T: ?Sized>(left: Option<&T>, right: Option<&T>, rule: impl Fn(&T, &T) -> bool) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => rule(left, right),
        _ => false,
    }
}

fn pairwise<T: AstNode>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| structurally_equal(left, right))
}

/// Implements `PartialEq` through [`structurally_equal`], including between kinds
macro_rules! structural_eq {
    ($($left:ty => [$($right:ty),*]),* $(,)?) => {
        $(
            $(
                impl PartialEq<$right> for $left {
                    fn eq(&self, other: &$right) -> bool {
                        $crate::gherkin::ast::equality::structurally_equal(self, other)
                    }
                }
            )*
        )*
    };
}

pub(crate) use structural_eq;
