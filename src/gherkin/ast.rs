//! Node model for Gherkin feature documents
//!
//! The tree mirrors the layout of a feature document: a [`Directory`] holds
//! [`FeatureFile`]s, a file holds at most one [`Feature`], which owns an optional
//! [`Background`] and an ordered list of tests ([`Scenario`] or [`Outline`]), and so on
//! down to the [`Cell`]s of a [`Row`].
//!
//! ## Capabilities
//!
//!     Nodes are not compared or traversed by their concrete kind. Each kind implements
//!     a subset of small capability traits (`Named`, `Described`, `Tagged`, `Stepped`,
//!     `Containing`, `TableHolder`, `Valued`), and the [`AstNode`] trait exposes them
//!     through `as_*` accessors. Equality ([`equality`]) and generic traversal
//!     ([`NodeRef::children`], [`Cursor`]) only look at capabilities, so a Background and
//!     a Scenario with the same steps compare equal.
//!
//! ## Construction
//!
//!     Every node can be built two ways:
//!
//!         - From source text with `from_source` / `from_source_with`. Fragments that are not
//!           a whole document (a step, a row, an example...) are wrapped in a minimal
//!           document before parsing, and parse errors name a synthetic file such as
//!           `stand_alone_step.feature`.
//!         - With `Default::default()` and direct field mutation.
//!
//!     Nodes built from text remember the line they started on (`source_line()`) and the
//!     raw record the parser produced for them (`parsing_data()`). Neither takes part in
//!     equality or serialization.
//!
//! ## Ancestry
//!
//!     Parents own their children by value. Upward navigation goes through a [`Cursor`],
//!     which records the chain of borrowed parents while descending from a root. See the
//!     [ancestry] module.
//!
//! ## Modules
//!
//! - `elements` - Node type definitions, one module per kind
//! - `traits` - `AstNode`, the capability traits and the `Visitor`
//! - `node_ref` - Borrowed, kind-tagged references used for generic traversal
//! - `ancestry` - Cursor based parent lookup
//! - `equality` - Capability-intersection structural comparison
//! - `description` - Description normalization
//! - `row_data` - Input shapes accepted by `Example::add_row` and `Example::remove_row`
//! - `error` - Parse and model errors

pub mod ancestry;
pub mod description;
pub mod elements;
pub mod equality;
pub mod error;
pub mod node_ref;
pub mod row_data;
pub mod traits;

pub use ancestry::Cursor;
pub use elements::{
    Background, Block, Cell, Comment, Directory, DocString, Example, Feature, FeatureFile, Outline,
    Row, Scenario, Step, Table, Tag, Test,
};
pub use equality::structurally_equal;
pub use error::{ModelError, ParseError};
pub use node_ref::{NodeKind, NodeRef};
pub use row_data::{IntoRowData, RowData};
pub use traits::{
    AstNode, Capability, Containing, Described, Named, Stepped, TableHolder, Tagged, Valued,
    Visitor,
};
