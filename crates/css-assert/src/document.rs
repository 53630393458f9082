//! Document acquisition: response bytes to a queryable HTML tree.

use scraper::Html;

use crate::config::ParseMode;
use crate::http::Response;
use crate::result::SelectResult;
use crate::selection::{parse_selector, Selection};

/// A parsed, read-only HTML document
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a document from raw bytes.
    ///
    /// Bytes are decoded as UTF-8 with lossy replacement. Parsing never
    /// fails: malformed markup is recovered by the parser.
    #[must_use]
    pub fn parse(bytes: &[u8], mode: ParseMode) -> Self {
        let text = String::from_utf8_lossy(bytes);
        let html = match mode {
            ParseMode::Document => Html::parse_document(&text),
            ParseMode::Fragment => Html::parse_fragment(&text),
        };
        tracing::trace!(?mode, bytes = bytes.len(), "parsed html");
        Self { html }
    }

    /// Resolve a CSS selector against the whole document
    ///
    /// # Errors
    ///
    /// Returns [`crate::SelectError::InvalidSelector`] if the selector does
    /// not parse. A selector that matches nothing yields an empty selection.
    pub fn select(&self, selector: &str) -> SelectResult<Selection<'_>> {
        let compiled = parse_selector(selector)?;
        let selection = Selection::new(&self.html, self.html.select(&compiled).collect());
        tracing::debug!(selector, matches = selection.len(), "selected nodes");
        Ok(selection)
    }

    /// Rendered text of the whole document
    #[must_use]
    pub fn text(&self) -> String {
        self.html.root_element().text().collect()
    }

    /// Underlying parsed tree
    #[must_use]
    pub const fn html(&self) -> &Html {
        &self.html
    }
}

/// Buffer the response body (if it is a stream) and parse it.
///
/// Safe to call repeatedly on the same response: each call re-parses the
/// buffered bytes into an independent document.
///
/// # Errors
///
/// Returns [`crate::SelectError::BodyRead`] if the body stream cannot be read
pub fn acquire(response: &mut Response, mode: ParseMode) -> SelectResult<Document> {
    let bytes = response.body_bytes()?;
    Ok(Document::parse(bytes, mode))
}
