use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The greeting every smoke case writes before asserting.
pub const GREETING: &str = "Hello, world";

/// Plain binary64 addition, the arithmetic under check.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// The one error a smoke case can produce: the computed sum didn't exactly equal the expected literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssertMismatch {
    /// The literal the case was told to expect.
    pub expected: f64,
    /// What the addition actually produced.
    pub actual: f64,
}

impl std::fmt::Display for AssertMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "assertion mismatch: expected {:?}, actual {:?}",
            self.expected, self.actual
        )
    }
}

impl error_stack::Context for AssertMismatch {}

/// A single greeting + exact sum check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmokeCase {
    /// Name the case is reported under.
    pub name: String,
    /// Left operand.
    pub a: f64,
    /// Right operand.
    pub b: f64,
    /// Compared against `a + b` with exact equality.
    pub expected: f64,
}

impl SmokeCase {
    /// Create a case summing `a` and `b`, expecting exactly `expected`.
    pub fn new(name: impl Into<String>, a: f64, b: f64, expected: f64) -> Self {
        Self {
            name: name.into(),
            a,
            b,
            expected,
        }
    }

    /// The canonical case: `2.0 + 3.5 == 5.5`, all exactly representable.
    pub fn hello() -> Self {
        Self::new("hello", 2.0, 3.5, 5.5)
    }

    /// Replace the expected literal, e.g. to confirm the harness reports failures.
    pub fn with_expected(mut self, expected: f64) -> Self {
        self.expected = expected;
        self
    }

    /// Write the greeting to `out`, then compute and compare the sum.
    ///
    /// Returns the computed sum on success. A write failure is reported as [`AnyErr`],
    /// whereas a wrong sum is reported as [`AssertMismatch`], which the suite treats as a case failure.
    pub fn run(&self, out: &mut impl Write) -> RResult<f64, AnyErr> {
        writeln!(out, "{}", GREETING).change_context(AnyErr)?;
        debug!(case = %self.name, a = self.a, b = self.b, "greeting written");

        match self.check() {
            Ok(actual) => Ok(actual),
            Err(report) => Err(report.change_context(AnyErr)),
        }
    }

    /// The assertion on its own, no output. Exact `==`, never an epsilon.
    #[allow(clippy::float_cmp)]
    pub fn check(&self) -> RResult<f64, AssertMismatch> {
        let actual = add(self.a, self.b);
        if actual == self.expected {
            Ok(actual)
        } else {
            Err(Report::new(AssertMismatch {
                expected: self.expected,
                actual,
            })
            .attach_printable(format!("case '{}': {} + {}", self.name, self.a, self.b)))
        }
    }
}
