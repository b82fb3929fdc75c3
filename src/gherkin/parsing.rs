//! Parsing boundary
//!
//!     Tokenizing and grammar rules live behind the [`ParsingAdapter`] trait. An adapter
//!     takes source text, a file name and a dialect key, and returns a [`RawDocument`]: a
//!     JSON tree in one of three known schema versions.
//!
//!         - [`SchemaVersion::Legacy`]: a flat array of features, `line` keys, `elements`
//!           holding backgrounds, scenarios and outlines, plain string cells.
//!         - [`SchemaVersion::Ast`]: a typed `GherkinDocument` with nested `location`
//!           objects, `tableHeader`/`tableBody` examples and step `argument`s.
//!         - [`SchemaVersion::Messages`]: a `gherkinDocument` envelope whose feature
//!           children are `background`/`scenario` wrappers, with ids, `dataTable` and
//!           `docString` arguments; an outline is a scenario with examples.
//!
//!     [`normalize`] dispatches to one decoder per version and yields a single
//!     [`DocumentRecord`] shape. The node builders only see records.
//!
//! Pipeline
//!
//!     source text -> adapter -> RawDocument -> normalize -> DocumentRecord -> building -> nodes
//!
//!     The crate ships a [`ReferenceAdapter`], a line-based Gherkin reader that can emit any
//!     of the three versions. [`Parser`] pairs an adapter with a dialect key and is what the
//!     node constructors (`from_source_with`) take.
//!
//! Stand-alone fragments
//!
//!     A step, a row or an example is not a document on its own. [`Fragment`] wraps such
//!     text in a minimal document using the dialect's keywords, and names the parse after
//!     the fragment (`stand_alone_row.feature`) so errors are easy to attribute.

pub mod records;
pub mod reference;
pub mod schema;
mod standalone;

use crate::gherkin::ast::error::ParseError;
use crate::gherkin::ast::Test;
use crate::gherkin::building;
use crate::gherkin::config::ModelConfig;
use records::{DocumentRecord, TestKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub use reference::{Dialect, ReferenceAdapter};
pub use standalone::Fragment;

/// Known shapes of adapter output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaVersion {
    Legacy,
    Ast,
    #[default]
    Messages,
}

impl SchemaVersion {
    pub const ALL: [SchemaVersion; 3] = [
        SchemaVersion::Legacy,
        SchemaVersion::Ast,
        SchemaVersion::Messages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::Legacy => "legacy",
            SchemaVersion::Ast => "ast",
            SchemaVersion::Messages => "messages",
        }
    }

    /// Guess the version from the shape of the data
    pub fn detect(data: &Value) -> Option<Self> {
        match data {
            Value::Array(_) => Some(SchemaVersion::Legacy),
            Value::Object(map) if map.contains_key("gherkinDocument") => {
                Some(SchemaVersion::Messages)
            }
            Value::Object(map)
                if map.get("type").and_then(Value::as_str) == Some("GherkinDocument") =>
            {
                Some(SchemaVersion::Ast)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adapter output: versioned, unprocessed
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub version: SchemaVersion,
    pub data: Value,
}

/// The primary keyword of each construct in a dialect
///
/// Used to wrap stand-alone fragments into a parseable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    pub feature: String,
    pub background: String,
    pub scenario: String,
    pub outline: String,
    pub examples: String,
    pub step: String,
}

/// The external parser, seen from the model
pub trait ParsingAdapter: fmt::Debug {
    /// Parse a whole document. Failures must name `file_name`.
    fn parse(&self, source: &str, file_name: &str, dialect: &str)
        -> Result<RawDocument, ParseError>;

    /// Primary keywords of a dialect, `None` when the dialect is unknown
    fn keywords(&self, dialect: &str) -> Option<Keywords>;
}

/// Decode adapter output of any known version into records
pub fn normalize(raw: &RawDocument, file_name: &str) -> Result<DocumentRecord, ParseError> {
    tracing::debug!(version = %raw.version, file_name, "normalizing parser output");
    match raw.version {
        SchemaVersion::Legacy => schema::legacy::decode(&raw.data, file_name),
        SchemaVersion::Ast => schema::ast::decode(&raw.data, file_name),
        SchemaVersion::Messages => schema::messages::decode(&raw.data, file_name),
    }
}

/// An adapter paired with a dialect key
#[derive(Debug)]
pub struct Parser {
    adapter: Box<dyn ParsingAdapter>,
    dialect: String,
}

impl Parser {
    pub fn new(adapter: impl ParsingAdapter + 'static, dialect: impl Into<String>) -> Self {
        Self {
            adapter: Box::new(adapter),
            dialect: dialect.into(),
        }
    }

    /// The reference adapter emitting `version`, English dialect
    pub fn with_schema(version: SchemaVersion) -> Self {
        Self::new(ReferenceAdapter::new(version), "en")
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(
            ReferenceAdapter::new(config.parsing.schema),
            config.parsing.dialect.clone(),
        )
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }

    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    pub fn keywords(&self, file_name: &str) -> Result<Keywords, ParseError> {
        self.adapter
            .keywords(&self.dialect)
            .ok_or_else(|| ParseError::UnknownDialect {
                file_name: file_name.to_string(),
                dialect: self.dialect.clone(),
            })
    }

    /// Parse and normalize a whole document
    pub fn parse_document(
        &self,
        source: &str,
        file_name: &str,
    ) -> Result<DocumentRecord, ParseError> {
        tracing::debug!(file_name, dialect = %self.dialect, "parsing document");
        let raw = self.adapter.parse(source, file_name, &self.dialect)?;
        normalize(&raw, file_name)
    }

    /// Parse a fragment wrapped into a minimal document
    pub fn parse_fragment(
        &self,
        fragment: Fragment,
        source: &str,
    ) -> Result<DocumentRecord, ParseError> {
        let file_name = fragment.file_name();
        let keywords = self.keywords(&file_name)?;
        let text = fragment.wrap(source, &keywords);
        self.parse_document(&text, &file_name)
    }

    /// Parse a scenario or outline fragment into the matching node
    pub(crate) fn parse_test_fragment(
        &self,
        fragment: Fragment,
        source: &str,
    ) -> Result<Test, ParseError> {
        let document = self.parse_fragment(fragment, source)?;
        let record = document
            .feature
            .and_then(|feature| feature.tests.into_iter().next())
            .ok_or_else(|| fragment.missing())?;
        Ok(match record.kind {
            TestKind::Scenario => Test::Scenario(building::scenario(record)),
            TestKind::Outline => Test::Outline(building::outline(record)),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::with_schema(SchemaVersion::default())
    }
}
