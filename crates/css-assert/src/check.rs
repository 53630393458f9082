//! The catalogue of selector checks.
//!
//! Each [`Check`] carries its own parameters and is evaluated by
//! [`crate::Engine::evaluate`]. The free constructor functions mirror the
//! shapes callers write in tests:
//!
//! ```ignore
//! let check = first_text_value("h1", "Header");
//! check.assert(&mut Response::html("<h1>Header</h1>"), &Request::get("/"))?;
//! ```

use std::fmt;
use std::sync::Arc;

use crate::result::DelegateError;
use crate::selection::Selection;

/// Caller-supplied predicate over a resolved [`Selection`]
pub type SelectionFn = dyn Fn(&Selection<'_>) -> Result<(), DelegateError> + Send + Sync;

/// A single assertion against the HTML body of a response
#[derive(Clone)]
pub enum Check {
    /// The first match has exactly the expected text
    FirstTextValue {
        /// CSS selector
        selector: String,
        /// Expected rendered text
        expected: String,
    },
    /// The match at position `n` (0-indexed) has exactly the expected text
    NthTextValue {
        /// Position in the match sequence
        n: usize,
        /// CSS selector
        selector: String,
        /// Expected rendered text
        expected: String,
    },
    /// Some match has text containing the expected value
    ContainsTextValue {
        /// CSS selector
        selector: String,
        /// Substring to find
        expected: String,
    },
    /// Every selector matches at least one element
    Exists {
        /// CSS selectors, all required
        selectors: Vec<String>,
    },
    /// Every selector matches nothing
    NotExists {
        /// CSS selectors, all required to be absent
        selectors: Vec<String>,
    },
    /// The raw body contains the text literally
    TextExists {
        /// Text to find
        text: String,
    },
    /// A caller-supplied predicate over the resolved selection
    Selection {
        /// CSS selector
        selector: String,
        /// Predicate; its error becomes the outcome unchanged
        delegate: Arc<SelectionFn>,
    },
}

impl Check {
    /// Short name of the check variant
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FirstTextValue { .. } => "first_text_value",
            Self::NthTextValue { .. } => "nth_text_value",
            Self::ContainsTextValue { .. } => "contains_text_value",
            Self::Exists { .. } => "exists",
            Self::NotExists { .. } => "not_exists",
            Self::TextExists { .. } => "text_exists",
            Self::Selection { .. } => "selection",
        }
    }

    /// Human-readable description of what the check expects
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::FirstTextValue { selector, expected } => {
                format!("first text of '{selector}' equals '{expected}'")
            }
            Self::NthTextValue {
                n,
                selector,
                expected,
            } => format!("text at index {n} of '{selector}' equals '{expected}'"),
            Self::ContainsTextValue { selector, expected } => {
                format!("text of '{selector}' contains '{expected}'")
            }
            Self::Exists { selectors } => format!("elements exist: {}", quoted(selectors)),
            Self::NotExists { selectors } => format!("elements absent: {}", quoted(selectors)),
            Self::TextExists { text } => format!("body contains text '{text}'"),
            Self::Selection { selector, .. } => format!("custom selection on '{selector}'"),
        }
    }
}

fn quoted(selectors: &[String]) -> String {
    selectors
        .iter()
        .map(|s| format!("'{s}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection { selector, .. } => f
                .debug_struct("Selection")
                .field("selector", selector)
                .finish_non_exhaustive(),
            other => f
                .debug_struct("Check")
                .field("kind", &other.kind())
                .field("description", &other.description())
                .finish(),
        }
    }
}

/// Check that the first element matching `selector` has text `expected`
#[must_use]
pub fn first_text_value(selector: impl Into<String>, expected: impl Into<String>) -> Check {
    Check::FirstTextValue {
        selector: selector.into(),
        expected: expected.into(),
    }
}

/// Check that the element at position `n` has text `expected`
#[must_use]
pub fn nth_text_value(n: usize, selector: impl Into<String>, expected: impl Into<String>) -> Check {
    Check::NthTextValue {
        n,
        selector: selector.into(),
        expected: expected.into(),
    }
}

/// Check that some matching element's text contains `expected`
#[must_use]
pub fn contains_text_value(selector: impl Into<String>, expected: impl Into<String>) -> Check {
    Check::ContainsTextValue {
        selector: selector.into(),
        expected: expected.into(),
    }
}

/// Check that every selector matches at least one element
#[must_use]
pub fn exists<I, S>(selectors: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Check::Exists {
        selectors: selectors.into_iter().map(Into::into).collect(),
    }
}

/// Check that a single selector matches at least one element
#[must_use]
pub fn element_exists(selector: impl Into<String>) -> Check {
    Check::Exists {
        selectors: vec![selector.into()],
    }
}

/// Check that no selector matches any element
#[must_use]
pub fn not_exists<I, S>(selectors: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Check::NotExists {
        selectors: selectors.into_iter().map(Into::into).collect(),
    }
}

/// Check that the raw body contains `text`
#[must_use]
pub fn text_exists(text: impl Into<String>) -> Check {
    Check::TextExists { text: text.into() }
}

/// Resolve `selector` and hand the selection to `delegate`
#[must_use]
pub fn selection<F>(selector: impl Into<String>, delegate: F) -> Check
where
    F: Fn(&Selection<'_>) -> Result<(), DelegateError> + Send + Sync + 'static,
{
    Check::Selection {
        selector: selector.into(),
        delegate: Arc::new(delegate),
    }
}
