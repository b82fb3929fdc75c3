//! Error types for parsing and model operations

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a parsing adapter or the schema normalization layer
///
/// Every variant names the file being parsed. Fragments parsed on their own use a
/// synthetic name such as `stand_alone_step.feature`, so callers can tell them apart
/// from real files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{file_name}' line {line}: {message}")]
    Syntax {
        file_name: String,
        line: usize,
        message: String,
    },

    #[error("'{file_name}': unknown dialect '{dialect}'")]
    UnknownDialect { file_name: String, dialect: String },

    #[error("'{file_name}': malformed {version} record: {message}")]
    Malformed {
        file_name: String,
        version: String,
        message: String,
    },

    #[error("'{file_name}': no {expected} found in source text")]
    Missing { file_name: String, expected: String },
}

impl ParseError {
    pub fn file_name(&self) -> &str {
        match self {
            ParseError::Syntax { file_name, .. }
            | ParseError::UnknownDialect { file_name, .. }
            | ParseError::Malformed { file_name, .. }
            | ParseError::Missing { file_name, .. } => file_name,
        }
    }
}

/// Failures of model operations: loading, scanning and row mutation
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The row data was neither a sequence nor a mapping
    #[error("Can only add or remove a row from a sequence or a mapping, but received {0}")]
    InvalidRowData(String),

    #[error("Cannot add a row. No parameters have been set.")]
    NoParameters,

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan directory: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file() {
        let err = ParseError::Syntax {
            file_name: "stand_alone_background.feature".to_string(),
            line: 2,
            message: "unexpected line".to_string(),
        };
        assert_eq!(err.file_name(), "stand_alone_background.feature");
        assert_eq!(
            err.to_string(),
            "'stand_alone_background.feature' line 2: unexpected line"
        );
    }

    #[test]
    fn test_no_parameters_message() {
        assert_eq!(
            ModelError::NoParameters.to_string(),
            "Cannot add a row. No parameters have been set."
        );
    }

    #[test]
    fn test_parse_error_converts_into_model_error() {
        let err: ModelError = ParseError::Missing {
            file_name: "stand_alone_row.feature".to_string(),
            expected: "row".to_string(),
        }
        .into();
        assert!(matches!(err, ModelError::Parse(_)));
        assert!(err.to_string().contains("stand_alone_row.feature"));
    }
}
