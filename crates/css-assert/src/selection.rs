//! Node selection: CSS selectors resolved to ordered match sequences.
//!
//! # Design
//!
//! - **Document order**: matches are always returned in source order, which
//!   positional checks rely on
//! - **Empty is not an error**: a selector with no matches yields an empty
//!   [`Selection`]; only invalid syntax fails
//! - **Compositional**: [`Selection::find`] scopes a second selector to the
//!   descendants of the current matches

use scraper::{ElementRef, Html, Selector};

use crate::result::{SelectError, SelectResult};

/// Attribute used by [`data_test_id`]
pub const DATA_TEST_ID_ATTR: &str = "data-test-id";

/// Render an attribute selector matching elements whose `data-test-id`
/// equals `value`.
///
/// ```ignore
/// assert_eq!(data_test_id("product-5"), r#"[data-test-id="product-5"]"#);
/// ```
#[must_use]
pub fn data_test_id(value: &str) -> String {
    format!("[{DATA_TEST_ID_ATTR}=\"{value}\"]")
}

/// Compile a CSS selector
///
/// # Errors
///
/// Returns [`SelectError::InvalidSelector`] carrying the parser message
pub fn parse_selector(selector: &str) -> SelectResult<Selector> {
    Selector::parse(selector).map_err(|err| SelectError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Rendered text of a node: all descendant text concatenated
#[must_use]
pub fn node_text(node: &ElementRef<'_>) -> String {
    node.text().collect()
}

/// An ordered set of matched elements within one document
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    html: &'a Html,
    nodes: Vec<ElementRef<'a>>,
}

impl<'a> Selection<'a> {
    pub(crate) fn new(html: &'a Html, nodes: Vec<ElementRef<'a>>) -> Self {
        Self { html, nodes }
    }

    /// Resolve `selector` among the descendants of the matched nodes.
    ///
    /// The result is in document order and holds each element once, even
    /// when matched nodes are nested inside one another.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::InvalidSelector`] if the selector does not parse
    pub fn find(&self, selector: &str) -> SelectResult<Selection<'a>> {
        let compiled = parse_selector(selector)?;
        let nodes: Vec<ElementRef<'a>> = self
            .html
            .select(&compiled)
            .filter(|candidate| {
                candidate
                    .ancestors()
                    .any(|ancestor| self.nodes.iter().any(|node| node.id() == ancestor.id()))
            })
            .collect();
        tracing::debug!(selector, matches = nodes.len(), "selected scoped nodes");
        Ok(Self::new(self.html, nodes))
    }

    /// Number of matched nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at position `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ElementRef<'a>> {
        self.nodes.get(index).copied()
    }

    /// First matched node
    #[must_use]
    pub fn first(&self) -> Option<ElementRef<'a>> {
        self.get(0)
    }

    /// Matched nodes in document order
    #[must_use]
    pub fn nodes(&self) -> &[ElementRef<'a>] {
        &self.nodes
    }

    /// Iterate matched nodes in document order
    pub fn iter(&self) -> impl Iterator<Item = ElementRef<'a>> + '_ {
        self.nodes.iter().copied()
    }

    /// Combined rendered text of every matched node
    #[must_use]
    pub fn text(&self) -> String {
        self.nodes.iter().map(node_text).collect()
    }

    /// Rendered text of each matched node
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.nodes.iter().map(node_text).collect()
    }

    /// Attribute value of the first matched node
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.nodes.first().and_then(|node| node.value().attr(name))
    }

    /// Outer HTML of the first matched node
    #[must_use]
    pub fn html(&self) -> Option<String> {
        self.nodes.first().map(ElementRef::html)
    }
}
