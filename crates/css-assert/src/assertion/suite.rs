//! Check suites (soft assertions).
//!
//! Run several checks against one response and collect every failure
//! instead of stopping at the first one.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::Assert;
use crate::check::Check;
use crate::engine::Engine;
use crate::http::{Request, Response};
use crate::result::{SelectError, SelectResult};

/// Mode for suite evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssertionMode {
    /// Evaluate every check (default)
    #[default]
    Collect,
    /// Stop on first failure
    FailFast,
}

/// Outcome of one check within a suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Position of the check in the suite
    pub index: usize,
    /// What the check expected
    pub description: String,
    /// Whether it passed
    pub passed: bool,
    /// Failure message, if any
    pub message: Option<String>,
}

/// A named, ordered group of checks
#[derive(Debug, Clone, Default)]
pub struct CheckSuite {
    name: String,
    checks: Vec<Check>,
    mode: AssertionMode,
}

impl CheckSuite {
    /// Create an empty suite
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the evaluation mode
    #[must_use]
    pub const fn mode(mut self, mode: AssertionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Append a check
    #[must_use]
    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Suite name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks in evaluation order
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Evaluate the checks against a response
    pub fn run(&self, engine: &Engine, response: &mut Response, request: &Request) -> SuiteReport {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(self.checks.len());

        for (index, check) in self.checks.iter().enumerate() {
            let result = engine.evaluate(check, response, request);
            let failed = result.is_err();
            outcomes.push(CheckOutcome {
                index,
                description: check.description(),
                passed: !failed,
                message: result.err().map(|err| err.to_string()),
            });
            if failed && self.mode == AssertionMode::FailFast {
                break;
            }
        }

        let report = SuiteReport {
            name: self.name.clone(),
            outcomes,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        tracing::debug!(
            suite = %report.name,
            passed = report.passed_count(),
            failed = report.failed_count(),
            "suite evaluated"
        );
        report
    }
}

impl Assert for CheckSuite {
    fn assert(&self, response: &mut Response, request: &Request) -> SelectResult<()> {
        self.run(&Engine::default(), response, request).verify()
    }
}

/// Result of running a [`CheckSuite`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite name
    pub name: String,
    /// Outcomes of the evaluated checks
    pub outcomes: Vec<CheckOutcome>,
    /// Wall-clock evaluation time
    pub duration_ms: u64,
}

impl SuiteReport {
    /// Number of passing checks
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of failing checks
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    /// Whether every evaluated check passed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Failing outcomes
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// `Ok(())` if every check passed, otherwise one failure listing each
    /// failed check's message on its own line
    pub fn verify(&self) -> SelectResult<()> {
        if self.is_success() {
            return Ok(());
        }
        let mut message = format!(
            "{} of {} check(s) failed in '{}':",
            self.failed_count(),
            self.outcomes.len(),
            self.name
        );
        for outcome in self.failures() {
            message.push_str(&format!(
                "\n  {}. {}",
                outcome.index + 1,
                outcome.message.as_deref().unwrap_or_default()
            ));
        }
        Err(SelectError::failed(message))
    }

    /// Serialize the report as pretty JSON
    pub fn to_json(&self) -> SelectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
