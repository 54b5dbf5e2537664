use serde::{Deserialize, Serialize};

use super::{AssertMismatch, SmokeCase};

/// The outcome of running a single registered case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Name of the case.
    pub name: String,
    /// Whether the assertion held.
    pub passed: bool,
    /// The literal the case compared against.
    pub expected: f64,
    /// The computed sum.
    pub actual: f64,
    /// Formatted failure, `None` on pass.
    pub failure: Option<String>,
}

impl CaseReport {
    pub(crate) fn pass(case: &SmokeCase, actual: f64) -> Self {
        Self {
            name: case.name.clone(),
            passed: true,
            expected: case.expected,
            actual,
            failure: None,
        }
    }

    pub(crate) fn from_mismatch(case: &SmokeCase, mismatch: &AssertMismatch) -> Self {
        Self {
            name: case.name.clone(),
            passed: false,
            expected: case.expected,
            actual: mismatch.actual,
            failure: Some(mismatch.to_string()),
        }
    }
}

/// All case outcomes of a suite run, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// One entry per registered case.
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    /// True when every case passed.
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.passed)
    }

    /// Number of passing cases.
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    /// Number of failing cases.
    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    /// `0` when everything passed, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Human readable summary, one line per case then a totals line.
    pub fn render(&self, color: bool) -> String {
        use colored::Colorize;

        let mut out = String::new();
        for case in &self.cases {
            let status = match (case.passed, color) {
                (true, true) => "ok".green().to_string(),
                (true, false) => "ok".to_string(),
                (false, true) => "FAILED".red().to_string(),
                (false, false) => "FAILED".to_string(),
            };
            out.push_str(&format!("case {} ... {}\n", case.name, status));
            if let Some(failure) = &case.failure {
                out.push_str(&format!("    {}\n", failure));
            }
        }
        out.push_str(&format!(
            "result: {} passed; {} failed\n",
            self.passed(),
            self.failed()
        ));
        out
    }
}
