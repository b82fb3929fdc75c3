//! Reference parsing adapter
//!
//! A line-based Gherkin reader shipped with the crate. It reads a document into records
//! and encodes them as any of the known schema versions, which makes it both the default
//! parser and a fixture for the decoders.
//!
//! A `# language: xx` comment before the first content line overrides the dialect the
//! caller asked for.

mod dialect;
mod lines;
mod reader;

use super::records::DocumentRecord;
use super::{schema, Keywords, ParsingAdapter, RawDocument, SchemaVersion};
use crate::gherkin::ast::error::ParseError;
use reader::Reader;

pub use dialect::Dialect;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceAdapter {
    version: SchemaVersion,
}

impl ReferenceAdapter {
    pub fn new(version: SchemaVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Read `source` into records, without encoding
    pub fn read(
        &self,
        source: &str,
        file_name: &str,
        dialect: &str,
    ) -> Result<DocumentRecord, ParseError> {
        let code = header_dialect(source).unwrap_or(dialect);
        let dialect = Dialect::find(code).ok_or_else(|| ParseError::UnknownDialect {
            file_name: file_name.to_string(),
            dialect: code.to_string(),
        })?;
        Reader::new(source, dialect, file_name).read_document()
    }
}

impl ParsingAdapter for ReferenceAdapter {
    fn parse(
        &self,
        source: &str,
        file_name: &str,
        dialect: &str,
    ) -> Result<RawDocument, ParseError> {
        let document = self.read(source, file_name, dialect)?;
        let data = match self.version {
            SchemaVersion::Legacy => schema::legacy::encode(&document, file_name),
            SchemaVersion::Ast => schema::ast::encode(&document, file_name),
            SchemaVersion::Messages => schema::messages::encode(&document, file_name),
        };
        Ok(RawDocument {
            version: self.version,
            data,
        })
    }

    fn keywords(&self, dialect: &str) -> Option<Keywords> {
        Dialect::find(dialect).map(Dialect::keywords)
    }
}

/// The dialect named by a language header among the leading comments
fn header_dialect(source: &str) -> Option<&str> {
    source
        .lines()
        .map(str::trim)
        .take_while(|line| line.is_empty() || line.starts_with('#'))
        .find_map(lines::language_header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_header_overrides_dialect() {
        let source = "# language: fr\nFonctionnalité: manger\n  Scénario: un\n    Soit une pomme\n";
        let document = ReferenceAdapter::default()
            .read(source, "fr.feature", "en")
            .unwrap();
        let feature = document.feature.unwrap();
        assert_eq!(feature.keyword, "Fonctionnalité");
        assert_eq!(feature.tests[0].steps[0].keyword, "Soit");
        assert!(document.comments.is_empty());
    }

    #[test]
    fn test_unknown_header_dialect() {
        let err = ReferenceAdapter::default()
            .read("# language: tlh\nFeature:", "k.feature", "en")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownDialect {
                file_name: "k.feature".to_string(),
                dialect: "tlh".to_string(),
            }
        );
    }

    #[test]
    fn test_late_language_comment_is_a_comment() {
        let document = ReferenceAdapter::default()
            .read("Feature: f\n# language: fr\n", "late.feature", "en")
            .unwrap();
        assert_eq!(document.comments[0].text, "# language: fr");
    }

    #[test]
    fn test_keywords_for_known_dialects() {
        let adapter = ReferenceAdapter::default();
        assert_eq!(adapter.keywords("en-au").unwrap().feature, "Pretty much");
        assert!(adapter.keywords("zz").is_none());
    }
}
