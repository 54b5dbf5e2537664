#![allow(clippy::module_inception)]
#![warn(clippy::disallowed_types)]
#![warn(missing_docs)]

//! smokecheck - Confirms a build/test toolchain can register, run and report a minimal check.

mod prelude;

/// Command line arguments for the `smokecheck` binary.
pub mod cli;
/// Error handling utilities.
pub mod errors;
/// Logging utilities
pub mod log;
/// Completely miscellaneous utilities
pub mod misc;
/// The smoke cases themselves, plus the suite that registers and reports them.
pub mod smoke;

#[cfg(any(test, feature = "test"))]
/// Test fixtures for downstream crates.
pub mod test;
