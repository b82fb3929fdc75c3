//! Treeviz formatter for nodes
//!
//! Treeviz is a one-line-per-node view of a tree, handy for eyeballing what a parse
//! produced. Nesting is drawn with box connectors and every line reads
//! `<connector> <kind>: <label>`, the label truncated to 30 characters.
//!
//! ```text
//! └─ feature: Refunds
//!   ├─ scenario: full refund
//!   │ └─ step: I return the item
//!   └─ tag: @money
//! ```
//!
//! Tags and comments are shown as children of the node owning them.

use crate::gherkin::ast::NodeRef;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str<'a>(root: impl Into<NodeRef<'a>>) -> String {
    let mut result = String::new();
    append_node(&mut result, root.into(), "", true);
    result
}

fn append_node(result: &mut String, node: NodeRef<'_>, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.label(), 30);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.kind(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        append_node(result, *child, &new_prefix, i == children.len() - 1);
    }
}
