//! Step argument: a data table or a doc string

use super::super::node_ref::NodeRef;
use super::super::traits::AstNode;
use super::doc_string::DocString;
use super::table::Table;

#[derive(Debug, Clone)]
pub enum Block {
    Table(Table),
    DocString(DocString),
}

impl Block {
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Block::Table(table) => NodeRef::Table(table),
            Block::DocString(doc_string) => NodeRef::DocString(doc_string),
        }
    }

    pub fn as_node(&self) -> &dyn AstNode {
        self.as_node_ref().as_node()
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            Block::DocString(_) => None,
        }
    }

    pub fn as_doc_string(&self) -> Option<&DocString> {
        match self {
            Block::DocString(doc_string) => Some(doc_string),
            Block::Table(_) => None,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Block::Table(table) => table.to_text(),
            Block::DocString(doc_string) => doc_string.to_text(),
        }
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

impl From<DocString> for Block {
    fn from(doc_string: DocString) -> Self {
        Block::DocString(doc_string)
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        crate::gherkin::ast::structurally_equal(self.as_node(), other.as_node())
    }
}
