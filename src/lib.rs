//! # feature-tree
//!
//! An in-memory model of Gherkin feature documents.
//!
//! Documents are parsed through a pluggable [parsing adapter](gherkin::parsing::ParsingAdapter),
//! built into a tree of typed nodes, and serialized back to canonical text that re-parses to
//! the same output.
//!
//! ## Testing
//!
//! For fluent node assertions and curated sample documents, see the
//! [testing module](gherkin::testing).

pub mod gherkin;

pub use gherkin::ast::{
    Background, Block, Cell, Comment, Directory, DocString, Example, Feature, FeatureFile, Outline,
    Row, Scenario, Step, Table, Tag, Test,
};
pub use gherkin::ast::{Cursor, ModelError, NodeKind, NodeRef, ParseError};
