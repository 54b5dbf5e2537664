mod case;
mod report;
mod suite;

pub use case::{add, AssertMismatch, SmokeCase, GREETING};
pub use report::{CaseReport, SuiteReport};
pub use suite::Suite;
