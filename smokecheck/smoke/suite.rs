use std::io::Write;

use super::{AssertMismatch, CaseReport, SmokeCase, SuiteReport};
use crate::prelude::*;

/// Registry of smoke cases, run in registration order.
#[derive(Debug, Clone, Default)]
pub struct Suite {
    cases: Vec<SmokeCase>,
}

impl Suite {
    /// An empty suite, [`Suite::run`] will refuse to run it until something is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A suite with the canonical [`SmokeCase::hello`] registered.
    pub fn with_defaults() -> Self {
        Self::new().register(SmokeCase::hello())
    }

    /// Add a case to the end of the suite.
    pub fn register(mut self, case: SmokeCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Registered cases, in run order.
    pub fn cases(&self) -> &[SmokeCase] {
        &self.cases
    }

    /// Run every case, writing greetings to `out`.
    ///
    /// A failing case is recorded in the report and doesn't stop the rest.
    /// Only an empty suite or a broken `out` writer errors.
    pub fn run(&self, out: &mut impl Write) -> RResult<SuiteReport, AnyErr> {
        if self.cases.is_empty() {
            return Err(anyerr!("no cases registered"));
        }

        let mut report = SuiteReport::default();
        for case in &self.cases {
            let span = tracing::info_span!("smoke_case", name = %case.name);
            let _enter = span.enter();

            let case_report = match case.run(out) {
                Ok(actual) => {
                    info!(actual, "passed");
                    CaseReport::pass(case, actual)
                }
                Err(e) => match e.downcast_ref::<AssertMismatch>() {
                    Some(mismatch) => {
                        warn!(expected = mismatch.expected, actual = mismatch.actual, "failed");
                        CaseReport::from_mismatch(case, mismatch)
                    }
                    // Not an assertion failure, the output itself is broken:
                    None => return Err(e),
                },
            };
            report.cases.push(case_report);
        }
        out.flush().change_context(AnyErr)?;

        Ok(report)
    }
}
