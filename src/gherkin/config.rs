//! Layered configuration
//!
//! `defaults/feature-tree.default.toml` is embedded into the crate so the documented
//! defaults and runtime behavior stay in sync. Callers layer their own files and overrides
//! on top through [`Loader`] before deserializing into [`ModelConfig`].

use crate::gherkin::ast::error::ModelError;
use crate::gherkin::parsing::SchemaVersion;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/feature-tree.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelConfig {
    pub parsing: ParsingConfig,
    pub formatting: FormattingConfig,
    pub scanning: ScanningConfig,
}

/// Which dialect and adapter output shape to parse with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub dialect: String,
    pub schema: SchemaVersion,
}

/// Mirrors the knobs of the Gherkin serializer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormattingConfig {
    pub indent_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanningConfig {
    /// Without the leading dot
    pub extension: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ModelConfig, ConfigError> {
        let config: ModelConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(
            dialect = %config.parsing.dialect,
            schema = %config.parsing.schema,
            "configuration loaded"
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ModelConfig, ConfigError> {
    Loader::new().build()
}

/// Defaults layered with one required file, failing as a model error.
pub fn load_file(path: impl AsRef<Path>) -> Result<ModelConfig, ModelError> {
    Ok(Loader::new().with_file(path).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parsing.dialect, "en");
        assert_eq!(config.parsing.schema, SchemaVersion::Messages);
        assert_eq!(config.formatting.indent_string, "  ");
        assert_eq!(config.scanning.extension, "feature");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.schema", "legacy")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parsing.schema, SchemaVersion::Legacy);
    }

    #[test]
    fn layers_files_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parsing]\ndialect = \"fr\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.parsing.dialect, "fr");
        assert_eq!(config.parsing.schema, SchemaVersion::Messages);
    }

    #[test]
    fn optional_files_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.scanning.extension, "feature");
    }

    #[test]
    fn missing_required_file_is_a_model_error() {
        let result = load_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(ModelError::Config(_))));
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let result = Loader::new()
            .set_override("parsing.schema", "yaml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
