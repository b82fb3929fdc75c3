use crate::gherkin::config::FormattingConfig;

/// Knobs of the Gherkin serializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingRules {
    /// One level of structural indentation
    pub indent_string: String,
}

impl FormattingRules {
    pub fn from_config(config: &FormattingConfig) -> Self {
        Self {
            indent_string: config.indent_string.clone(),
        }
    }
}

impl Default for FormattingRules {
    fn default() -> Self {
        Self {
            indent_string: "  ".to_string(),
        }
    }
}
