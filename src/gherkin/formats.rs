//! Output formats for nodes
//!
//! `gherkin` is the canonical text every node's `to_text()` produces. `treeviz` is a
//! debugging view of the tree. Both are available by name through the [`FormatRegistry`].

pub mod gherkin;
pub mod registry;
pub mod treeviz;

pub use gherkin::{FormattingRules, GherkinSerializer};
pub use registry::{FormatError, FormatRegistry, Formatter, GherkinFormatter, TreevizFormatter};
pub use treeviz::to_treeviz_str;
