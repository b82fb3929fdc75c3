//! Node type definitions, one module per kind
//!
//!     Elements fall into three groups:
//!
//!         - Sections: titled nodes with a keyword, a name and a description. The
//!           [feature](feature) owns a [background](background) and tests
//!           ([scenario](scenario), [outline](outline)); an outline owns
//!           [examples](example).
//!         - Steps and arguments: a [step](step) has at most one [block](block), either a
//!           [table](table) of [rows](row) and [cells](cell) or a [doc string](doc_string).
//!         - Leaves and files: [tags](tag), [comments](comment), [feature files](feature_file)
//!           and [directories](directory).
//!
//!     Every element has public fields for the data it models, private source information
//!     exposed through `AstNode::source_line()` and `AstNode::parsing_data()`, a `Default`
//!     built from empty values and English keywords, and `to_text()` producing canonical
//!     Gherkin (also available through `Display`).
//!
//!     The source information field is private, so outside this crate a node is built by
//!     mutating a default rather than with struct update syntax:
//!
//!     ```ignore
//!     let mut scenario = Scenario::default();
//!     scenario.name = "a refund".to_string();
//!     scenario.steps.push(Step::new("Given", "an order"));
//!     ```

pub mod background;
pub mod block;
pub mod cell;
pub mod comment;
pub mod directory;
pub mod doc_string;
pub mod example;
pub mod feature;
pub mod feature_file;
pub mod outline;
pub mod row;
pub mod scenario;
pub mod step;
pub mod table;
pub mod tag;
pub mod test;

pub use background::Background;
pub use block::Block;
pub use cell::Cell;
pub use comment::Comment;
pub use directory::Directory;
pub use doc_string::DocString;
pub use example::Example;
pub use feature::Feature;
pub use feature_file::FeatureFile;
pub use outline::Outline;
pub use row::Row;
pub use scenario::Scenario;
pub use step::Step;
pub use table::Table;
pub use tag::Tag;
pub use test::Test;

/// Source information captured when a node is built from text
///
/// Never part of equality or serialization.
#[derive(Debug, Clone, Default)]
pub(crate) struct SourceInfo {
    pub(crate) line: Option<usize>,
    pub(crate) raw: Option<serde_json::Value>,
}

impl SourceInfo {
    pub(crate) fn new(line: usize, raw: serde_json::Value) -> Self {
        Self {
            line: Some(line),
            raw: Some(raw),
        }
    }
}

/// Shared plumbing for element types: `to_text()`, `to_text_with()` and `Display`
macro_rules! element_common {
    ($($kind:ident),* $(,)?) => {
        $(
            impl $kind {
                /// Canonical Gherkin text for this node
                pub fn to_text(&self) -> String {
                    $crate::gherkin::formats::gherkin::GherkinSerializer::default().serialize(self)
                }

                /// Gherkin text laid out with custom rules, such as a configured indent
                pub fn to_text_with(
                    &self,
                    rules: &$crate::gherkin::formats::gherkin::FormattingRules,
                ) -> String {
                    $crate::gherkin::formats::gherkin::GherkinSerializer::new(rules.clone())
                        .serialize(self)
                }
            }

            impl std::fmt::Display for $kind {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.to_text())
                }
            }
        )*
    };
}

element_common!(
    Background,
    Cell,
    Comment,
    Directory,
    DocString,
    Example,
    Feature,
    FeatureFile,
    Outline,
    Row,
    Scenario,
    Step,
    Table,
    Tag,
);

/// Implements the `AstNode` source accessors from a `source: SourceInfo` field
macro_rules! source_accessors {
    () => {
        fn source_line(&self) -> Option<usize> {
            self.source.line
        }

        fn parsing_data(&self) -> Option<&serde_json::Value> {
            self.source.raw.as_ref()
        }
    };
}

pub(crate) use source_accessors;
