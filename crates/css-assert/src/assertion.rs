//! The assertion seam between css-assert and a host test framework.
//!
//! A host hands each assertion the completed response and its request and
//! treats `Ok(())` as a pass. Anything else is a failure whose `Display`
//! goes straight into the test report.

mod suite;

pub use suite::{AssertionMode, CheckOutcome, CheckSuite, SuiteReport};

use crate::check::Check;
use crate::engine::Engine;
use crate::http::{Request, Response};
use crate::result::SelectResult;

/// A pass/fail assertion over a completed HTTP exchange
pub trait Assert {
    /// Evaluate against the response (and originating request)
    ///
    /// # Errors
    ///
    /// Returns the failure to surface to the host framework
    fn assert(&self, response: &mut Response, request: &Request) -> SelectResult<()>;
}

impl Assert for Check {
    fn assert(&self, response: &mut Response, request: &Request) -> SelectResult<()> {
        Engine::default().evaluate(self, response, request)
    }
}

impl<F> Assert for F
where
    F: Fn(&mut Response, &Request) -> SelectResult<()>,
{
    fn assert(&self, response: &mut Response, request: &Request) -> SelectResult<()> {
        self(response, request)
    }
}

/// Run assertions in order against one response, stopping at the first
/// failure.
///
/// # Errors
///
/// Returns the first failing assertion's error
pub fn assert_all(
    assertions: &[&dyn Assert],
    response: &mut Response,
    request: &Request,
) -> SelectResult<()> {
    for assertion in assertions {
        assertion.assert(response, request)?;
    }
    Ok(())
}
