//! Format registry for node serialization
//!
//! This module provides a pluggable registry of output formats. Each format implements
//! the `Formatter` trait and can be registered with `FormatRegistry`.

use super::gherkin::{FormattingRules, GherkinSerializer};
use super::treeviz::to_treeviz_str;
use crate::gherkin::ast::NodeRef;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
}

/// Trait for node formatters
///
/// Implementors turn any node, and the tree below it, into a string.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "gherkin", "treeviz")
    fn name(&self) -> &str;

    fn serialize(&self, node: NodeRef<'_>) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Canonical Gherkin text
#[derive(Debug, Clone, Default)]
pub struct GherkinFormatter {
    rules: FormattingRules,
}

impl GherkinFormatter {
    pub fn new(rules: FormattingRules) -> Self {
        Self { rules }
    }
}

impl Formatter for GherkinFormatter {
    fn name(&self) -> &str {
        "gherkin"
    }

    fn serialize(&self, node: NodeRef<'_>) -> Result<String, FormatError> {
        Ok(GherkinSerializer::new(self.rules.clone()).serialize(node.as_node()))
    }

    fn description(&self) -> &str {
        "Canonical Gherkin source text"
    }
}

/// One line per node tree view
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, node: NodeRef<'_>) -> Result<String, FormatError> {
        Ok(to_treeviz_str(node))
    }

    fn description(&self) -> &str {
        "Tree view with one line per node"
    }
}

/// Registry of node formatters
///
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a node using the specified format
    pub fn serialize<'a>(
        &self,
        node: impl Into<NodeRef<'a>>,
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(node.into())
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GherkinFormatter::default());
        registry.register(TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gherkin::ast::{Step, Tag};

    // Test formatter
    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _node: NodeRef<'_>) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formatters.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").unwrap().description(), "Test formatter");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let tag = Tag::new("@a");
        assert_eq!(registry.serialize(&tag, "test").unwrap(), "test output");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let tag = Tag::new("@a");

        let FormatError::FormatNotFound(name) = registry.serialize(&tag, "nonexistent").unwrap_err();
        assert_eq!(name, "nonexistent");
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["gherkin", "treeviz"]);

        let step = Step::new("Given", "a step");
        assert_eq!(registry.serialize(&step, "gherkin").unwrap(), "Given a step");
        assert_eq!(
            registry.serialize(&step, "treeviz").unwrap(),
            "└─ step: a step\n"
        );
    }

    #[test]
    fn test_gherkin_formatter_uses_its_rules() {
        let formatter = GherkinFormatter::new(FormattingRules {
            indent_string: "    ".to_string(),
        });
        let step = Step::new("*", "x").with_block(crate::gherkin::ast::DocString::new("y"));
        assert_eq!(
            formatter.serialize((&step).into()).unwrap(),
            "* x\n    \"\"\"\n    y\n    \"\"\""
        );
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("test".to_string());
        assert_eq!(format!("{err}"), "Format 'test' not found");
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        registry.register(TestFormatter); // Replace

        assert_eq!(registry.list_formats().len(), 1);
    }
}
