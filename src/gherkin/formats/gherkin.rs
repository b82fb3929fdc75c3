//! Canonical Gherkin text
//!
//!     Every node serializes to text that parses back into an equal node, and serializing
//!     that node again gives the same text. The layout is fixed:
//!
//!         - Titled sections write their tags on one line, then `Keyword: name`, then the
//!           description surrounded by blank lines, then their body one level deeper.
//!         - Sections inside a feature or outline are separated by a blank line.
//!         - Tables are padded to the widest escaped cell of each column. A row on its
//!           own is not padded.
//!         - Doc strings use `"""` with the content type right after the opening
//!           delimiter; content lines keep their own indentation.
//!         - Feature files and directories serialize as their path.
//!
//!     No trailing newline is written.

mod formatting_rules;
mod serializer;

pub use formatting_rules::FormattingRules;
pub use serializer::{escape_cell, escape_doc_string_line, GherkinSerializer};
