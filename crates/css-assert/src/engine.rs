//! Predicate evaluation and outcome construction.
//!
//! Every [`Check`] variant is dispatched through [`Engine::evaluate`]. The
//! positional and substring checks share a single traversal
//! ([`Engine::match_any`]): the body is parsed, the selector resolved, and a
//! `(position, node)` predicate applied to each match until one holds.
//!
//! Failure messages are part of the public contract; hosts surface them
//! verbatim in test reports and tests compare them literally.

use scraper::ElementRef;

use crate::check::Check;
use crate::config::EngineConfig;
use crate::document::{acquire, Document};
use crate::http::{Request, Response};
use crate::result::{SelectError, SelectResult};
use crate::selection::node_text;

/// Evaluates checks under an [`EngineConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given config
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the config
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one check against a response.
    ///
    /// The request is accepted for symmetry with the host framework's
    /// assertion signature; no built-in check inspects it.
    ///
    /// # Errors
    ///
    /// - [`SelectError::AssertionFailed`] when the predicate does not hold
    /// - [`SelectError::BodyRead`] when the body cannot be read
    /// - [`SelectError::InvalidSelector`] for bad selector syntax
    /// - [`SelectError::Delegate`] with a `Selection` delegate's own error
    pub fn evaluate(
        &self,
        check: &Check,
        response: &mut Response,
        _request: &Request,
    ) -> SelectResult<()> {
        tracing::debug!(kind = check.kind(), "evaluating check");
        let outcome = match check {
            Check::FirstTextValue { selector, expected } => {
                let found = self.match_any(response, selector, |i, node| {
                    i == 0 && self.rendered(node) == *expected
                })?;
                require(found, || {
                    format!("did not find expected value '{expected}' for selector '{selector}'")
                })
            }
            Check::NthTextValue {
                n,
                selector,
                expected,
            } => {
                let found = self.match_any(response, selector, |i, node| {
                    i == *n && self.rendered(node) == *expected
                })?;
                require(found, || {
                    format!(
                        "did not find expected value '{expected}' at index {n} for selector '{selector}'"
                    )
                })
            }
            Check::ContainsTextValue { selector, expected } => {
                let found = self.match_any(response, selector, |_, node| {
                    self.rendered(node).contains(expected.as_str())
                })?;
                require(found, || {
                    format!("did not find value containing '{expected}' for selector '{selector}'")
                })
            }
            Check::Exists { selectors } => self.presence(response, selectors, true),
            Check::NotExists { selectors } => self.presence(response, selectors, false),
            Check::TextExists { text } => {
                let body = response.body_string()?;
                require(body.contains(text.as_str()), || {
                    format!("document did not contain text '{text}'")
                })
            }
            Check::Selection { selector, delegate } => {
                let document = acquire(response, self.config.parse_mode)?;
                let selection = document.select(selector)?;
                (delegate.as_ref())(&selection).map_err(SelectError::Delegate)
            }
        };
        tracing::debug!(kind = check.kind(), passed = outcome.is_ok(), "check evaluated");
        outcome
    }

    /// Evaluate checks in order, stopping at the first error
    ///
    /// # Errors
    ///
    /// Returns the first check's error, as [`Engine::evaluate`] does
    pub fn evaluate_all<'c, I>(
        &self,
        checks: I,
        response: &mut Response,
        request: &Request,
    ) -> SelectResult<()>
    where
        I: IntoIterator<Item = &'c Check>,
    {
        for check in checks {
            self.evaluate(check, response, request)?;
        }
        Ok(())
    }

    /// Parse the body, resolve `selector`, and report whether any
    /// `(position, node)` pair satisfies `predicate`.
    pub fn match_any<P>(
        &self,
        response: &mut Response,
        selector: &str,
        predicate: P,
    ) -> SelectResult<bool>
    where
        P: Fn(usize, &ElementRef<'_>) -> bool,
    {
        let document = acquire(response, self.config.parse_mode)?;
        let selection = document.select(selector)?;
        let found = selection
            .nodes()
            .iter()
            .enumerate()
            .any(|(i, node)| predicate(i, node));
        Ok(found)
    }

    /// Rendered text of a node after the configured normalization
    #[must_use]
    pub fn rendered(&self, node: &ElementRef<'_>) -> String {
        self.config.text.apply(&node_text(node))
    }

    /// Existence (`want == true`) or absence of every selector. The body is
    /// buffered once and each selector gets a fresh parse of those bytes.
    fn presence(
        &self,
        response: &mut Response,
        selectors: &[String],
        want: bool,
    ) -> SelectResult<()> {
        let bytes = response.body_bytes()?;
        for selector in selectors {
            let document = Document::parse(bytes, self.config.parse_mode);
            let found = !document.select(selector)?.is_empty();
            if found != want {
                return Err(SelectError::failed(format!(
                    "expected found='{want}' for selector '{selector}'"
                )));
            }
        }
        Ok(())
    }
}

fn require(found: bool, message: impl FnOnce() -> String) -> SelectResult<()> {
    if found {
        Ok(())
    } else {
        Err(SelectError::failed(message()))
    }
}
