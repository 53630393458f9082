//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::result::SelectResult;

/// How the response body is handed to the HTML parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Parse as a full document; missing `html`/`body` are synthesized
    #[default]
    Document,
    /// Parse as a fragment with no document wrapper
    Fragment,
}

/// Normalization applied to rendered node text before it is compared.
///
/// The expected value supplied by the caller is never normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextNormalization {
    /// Compare rendered text as is
    #[default]
    Exact,
    /// Strip leading and trailing whitespace
    Trim,
    /// Trim, then collapse every inner whitespace run to one space
    CollapseWhitespace,
}

impl TextNormalization {
    /// Apply this normalization to rendered text
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Exact => text.to_string(),
            Self::Trim => text.trim().to_string(),
            Self::CollapseWhitespace => text.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

/// Configuration for the assertion engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Parser entry point
    pub parse_mode: ParseMode,
    /// Text normalization for text predicates
    pub text: TextNormalization,
}

impl EngineConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse mode
    #[must_use]
    pub const fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Set the text normalization
    #[must_use]
    pub const fn with_text(mut self, text: TextNormalization) -> Self {
        self.text = text;
        self
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SelectResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::SelectError;

    #[test]
    fn test_default() {
        let config = EngineConfig::default();
        assert_eq!(config.parse_mode, ParseMode::Document);
        assert_eq!(config.text, TextNormalization::Exact);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_parse_mode(ParseMode::Fragment)
            .with_text(TextNormalization::Trim);
        assert_eq!(config.parse_mode, ParseMode::Fragment);
        assert_eq!(config.text, TextNormalization::Trim);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"text": "collapse_whitespace"}"#).unwrap();
        assert_eq!(config.parse_mode, ParseMode::Document);
        assert_eq!(config.text, TextNormalization::CollapseWhitespace);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = EngineConfig::from_json(r#"{"parse_mode": "xml"}"#).unwrap_err();
        assert!(matches!(err, SelectError::Config(_)));
    }

    #[test]
    fn test_normalization() {
        let text = "\n  some   spaced\ttext  \n";
        assert_eq!(TextNormalization::Exact.apply(text), text);
        assert_eq!(TextNormalization::Trim.apply(text), "some   spaced\ttext");
        assert_eq!(
            TextNormalization::CollapseWhitespace.apply(text),
            "some spaced text"
        );
    }
}
