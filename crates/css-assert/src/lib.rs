//! css-assert: CSS-selector assertions over HTML responses
//!
//! Assert facts about the HTML body of an HTTP response from inside a test:
//! the text of a selected element, whether selectors match anything, or
//! whether the raw body contains a literal string.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   CSS-ASSERT Architecture                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Check      │    │ Engine     │    │ Document / │            │
//! │   │ (catalog)  │───►│ (evaluate) │───►│ Selection  │            │
//! │   │            │    │            │    │ (scraper)  │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! │          ▲                 │                                     │
//! │          │                 ▼                                     │
//! │   ┌────────────┐    ┌────────────┐                               │
//! │   │ Assert /   │    │ Response   │                               │
//! │   │ CheckSuite │    │ (body buf) │                               │
//! │   └────────────┘    └────────────┘                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use css_assert::prelude::*;
//!
//! let mut response = Response::html(r#"<div class="myClass">first</div>"#);
//! nth_text_value(0, ".myClass", "first").assert(&mut response, &Request::get("/"))?;
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod assertion;
mod check;
mod config;
mod document;
mod engine;
mod http;
mod result;
mod selection;

pub use assertion::{
    assert_all, Assert, AssertionMode, CheckOutcome, CheckSuite, SuiteReport,
};
pub use check::{
    contains_text_value, element_exists, exists, first_text_value, not_exists, nth_text_value,
    selection, text_exists, Check, SelectionFn,
};
pub use config::{EngineConfig, ParseMode, TextNormalization};
pub use document::{acquire, Document};
pub use engine::Engine;
pub use http::{HttpMethod, Request, Response, ResponseBody};
pub use result::{DelegateError, SelectError, SelectResult};
pub use selection::{data_test_id, node_text, parse_selector, Selection, DATA_TEST_ID_ATTR};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        assert_all, contains_text_value, data_test_id, element_exists, exists, first_text_value,
        not_exists, nth_text_value, selection, text_exists, Assert, AssertionMode, Check,
        CheckSuite, Document, Engine, EngineConfig, ParseMode, Request, Response, SelectError,
        SelectResult, Selection, SuiteReport, TextNormalization,
    };
}
