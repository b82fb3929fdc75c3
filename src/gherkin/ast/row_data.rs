//! Input shapes accepted by example row mutation
//!
//! `Example::add_row` and `Example::remove_row` take either a positional sequence of
//! values or a mapping from parameter name to value. Values of any displayable type are
//! accepted; they are converted with `to_string()` and trimmed.
//!
//! Dynamic input arrives as a `serde_json::Value`: arrays and objects are accepted, any
//! other value is an argument error.

use super::error::ModelError;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

/// Row data after conversion to trimmed display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowData {
    /// Values matched to parameters by position
    Sequence(Vec<String>),
    /// Values matched to parameters by name
    Mapping(Vec<(String, String)>),
}

impl RowData {
    /// Resolve the data against a parameter row
    ///
    /// Sequences are padded with empty values or truncated to the parameter count. Mapping
    /// keys are matched by name, independent of order; parameters without a key get an
    /// empty value.
    pub fn values_for(&self, parameters: &[&str]) -> Vec<String> {
        match self {
            RowData::Sequence(values) => (0..parameters.len())
                .map(|index| values.get(index).cloned().unwrap_or_default())
                .collect(),
            RowData::Mapping(pairs) => parameters
                .iter()
                .map(|parameter| {
                    pairs
                        .iter()
                        .find(|(key, _)| key == parameter)
                        .map(|(_, value)| value.clone())
                        .unwrap_or_default()
                })
                .collect(),
        }
    }
}

/// Conversion into [`RowData`]
pub trait IntoRowData {
    fn into_row_data(self) -> Result<RowData, ModelError>;
}

fn display_text(value: impl Display) -> String {
    value.to_string().trim().to_string()
}

fn sequence<T: Display>(values: impl IntoIterator<Item = T>) -> RowData {
    RowData::Sequence(values.into_iter().map(display_text).collect())
}

fn mapping<K: Display, V: Display>(pairs: impl IntoIterator<Item = (K, V)>) -> RowData {
    RowData::Mapping(
        pairs
            .into_iter()
            .map(|(key, value)| (display_text(key), display_text(value)))
            .collect(),
    )
}

impl IntoRowData for RowData {
    fn into_row_data(self) -> Result<RowData, ModelError> {
        Ok(self)
    }
}

impl<T: Display> IntoRowData for Vec<T> {
    fn into_row_data(self) -> Result<RowData, ModelError> {
        Ok(sequence(self))
    }
}

impl<T: Display> IntoRowData for &[T] {
    fn into_row_data(self) -> Result<RowData, ModelError> {
        Ok(sequence(self))
    }
}

impl<T: Display, const N: usize> IntoRowData for [T; N] {
    fn into_row_data(self) -> Result<RowData, ModelError> {
        Ok(sequence(self))
    }
}

impl<K: Display, V: Display, S: BuildHasher> IntoRowData for HashMap<K, V, S> {
    fn into_row_data(self) -> Result<RowData, ModelError> {
        Ok(mapping(self))
    }
}

impl<K: Display, V: Display> IntoRowData for BTreeMap<K, V> {
    fn into_row_data(self) -> Result<RowData, ModelError> {
        Ok(mapping(self))
    }
}

impl IntoRowData for Value {
    fn into_row_data(self) -> Result<RowData, ModelError> {
        match self {
            Value::Array(values) => Ok(RowData::Sequence(
                values.iter().map(json_text).collect(),
            )),
            Value::Object(pairs) => Ok(RowData::Mapping(
                pairs
                    .iter()
                    .map(|(key, value)| (key.trim().to_string(), json_text(value)))
                    .collect(),
            )),
            other => Err(ModelError::InvalidRowData(json_type_name(&other).to_string())),
        }
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        Value::Null => String::new(),
        other => display_text(other),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
