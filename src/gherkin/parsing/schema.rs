//! Schema codecs
//!
//! One module per [`SchemaVersion`]. Each exposes `encode`, turning reader records into
//! that version's JSON tree, and `decode`, turning such a tree back into records. Decoded
//! records keep the JSON fragment they came from as `raw`.
//!
//! Decoding is lenient about missing optional keys (an absent `description` is empty)
//! and strict about wrong types (a `name` that is a number is malformed).

pub mod ast;
pub mod legacy;
pub mod messages;

use super::SchemaVersion;
use crate::gherkin::ast::error::ParseError;
use serde_json::{Map, Value};

/// Typed access to JSON fields with errors naming the file and version
pub(crate) struct Decoder<'f> {
    version: SchemaVersion,
    file_name: &'f str,
}

impl<'f> Decoder<'f> {
    pub(crate) fn new(version: SchemaVersion, file_name: &'f str) -> Self {
        Self { version, file_name }
    }

    pub(crate) fn malformed(&self, message: impl Into<String>) -> ParseError {
        ParseError::Malformed {
            file_name: self.file_name.to_string(),
            version: self.version.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn object<'v>(
        &self,
        value: &'v Value,
        what: &str,
    ) -> Result<&'v Map<String, Value>, ParseError> {
        value
            .as_object()
            .ok_or_else(|| self.malformed(format!("expected {what} to be an object")))
    }

    /// Optional object field
    pub(crate) fn child<'v>(
        &self,
        map: &'v Map<String, Value>,
        key: &str,
    ) -> Result<Option<&'v Map<String, Value>>, ParseError> {
        match map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.object(value, key).map(Some),
        }
    }

    /// Array field, empty when absent
    pub(crate) fn array<'v>(
        &self,
        map: &'v Map<String, Value>,
        key: &str,
    ) -> Result<&'v [Value], ParseError> {
        match map.get(key) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(self.malformed(format!("expected '{key}' to be an array"))),
        }
    }

    /// String field, empty when absent
    pub(crate) fn string(&self, map: &Map<String, Value>, key: &str) -> Result<String, ParseError> {
        match map.get(key) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(_) => Err(self.malformed(format!("expected '{key}' to be a string"))),
        }
    }

    /// Required line number field
    pub(crate) fn line(&self, map: &Map<String, Value>, key: &str) -> Result<usize, ParseError> {
        map.get(key)
            .and_then(Value::as_u64)
            .map(|line| line as usize)
            .ok_or_else(|| self.malformed(format!("missing numeric '{key}'")))
    }

    /// Line of a nested `location` object
    pub(crate) fn location(&self, map: &Map<String, Value>) -> Result<usize, ParseError> {
        let location = self
            .child(map, "location")?
            .ok_or_else(|| self.malformed("missing 'location'"))?;
        self.line(location, "line")
    }
}

/// A `location` object for a one-based line
pub(crate) fn location(line: usize) -> Value {
    serde_json::json!({ "line": line })
}

/// Whether a keyword names an outline in any known dialect
pub(crate) fn is_outline_keyword(keyword: &str) -> bool {
    let keyword = keyword.trim();
    super::Dialect::codes()
        .into_iter()
        .filter_map(super::Dialect::find)
        .any(|dialect| dialect.outline.iter().any(|outline| *outline == keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decoder_is_lenient_about_absent_keys() {
        let decoder = Decoder::new(SchemaVersion::Ast, "d.feature");
        let value = json!({"name": "x"});
        let map = decoder.object(&value, "feature").unwrap();
        assert_eq!(decoder.string(map, "description").unwrap(), "");
        assert!(decoder.array(map, "tags").unwrap().is_empty());
        assert!(decoder.child(map, "background").unwrap().is_none());
    }

    #[test]
    fn test_decoder_rejects_wrong_types() {
        let decoder = Decoder::new(SchemaVersion::Legacy, "d.feature");
        let value = json!({"name": 3, "line": "one"});
        let map = decoder.object(&value, "feature").unwrap();
        let err = decoder.string(map, "name").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'d.feature': malformed legacy record: expected 'name' to be a string"
        );
        assert!(decoder.line(map, "line").is_err());
        assert!(decoder.object(&json!([]), "feature").is_err());
    }

    #[test]
    fn test_outline_keywords() {
        assert!(is_outline_keyword("Scenario Outline"));
        assert!(is_outline_keyword("Plan du scénario"));
        assert!(!is_outline_keyword("Scenario"));
    }
}
