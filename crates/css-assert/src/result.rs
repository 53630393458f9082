//! Result and error types for css-assert.

use thiserror::Error;

/// Result type for css-assert operations
pub type SelectResult<T> = Result<T, SelectError>;

/// Error produced by a caller-supplied `Selection` delegate
pub type DelegateError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while evaluating a selector assertion
#[derive(Debug, Error)]
pub enum SelectError {
    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    BodyRead(#[from] std::io::Error),

    /// The selector is not valid CSS selector syntax
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// Selector as supplied by the caller
        selector: String,
        /// Parser message
        message: String,
    },

    /// The predicate evaluated to false
    #[error("{message}")]
    AssertionFailed {
        /// Failure message surfaced to the test report
        message: String,
    },

    /// A `Selection` delegate reported a failure
    #[error("{0}")]
    Delegate(DelegateError),

    /// Engine configuration could not be decoded
    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SelectError {
    /// Build an assertion failure
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Whether this error is a predicate failure rather than an
    /// acquisition, selector or delegate error
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_failed_displays_message_only() {
        let err = SelectError::failed("expected found='true' for selector '.myClass'");
        assert_eq!(
            err.to_string(),
            "expected found='true' for selector '.myClass'"
        );
        assert!(err.is_assertion_failure());
    }

    #[test]
    fn test_delegate_displays_unchanged() {
        let err = SelectError::Delegate("text did not match".into());
        assert_eq!(err.to_string(), "text did not match");
        assert!(!err.is_assertion_failure());
    }

    #[test]
    fn test_invalid_selector_names_selector() {
        let err = SelectError::InvalidSelector {
            selector: "div[".to_string(),
            message: "unexpected end of input".to_string(),
        };
        assert!(err.to_string().contains("'div['"));
    }

    #[test]
    fn test_body_read_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err = SelectError::from(io);
        assert!(matches!(err, SelectError::BodyRead(_)));
        assert!(err.to_string().contains("stream closed"));
    }
}
