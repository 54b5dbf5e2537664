use tracing::Level;

use crate::smoke::{SmokeCase, Suite};

/// A simple clap argument group for controlling the log level for cli usage.
#[derive(Debug, clap::Args)]
pub struct ClapLogLevelArgs {
    /// Enable verbose logging.
    #[arg(
        short,
        long,
        global = true,
        group = "verbosity",
        help_heading = "Log levels"
    )]
    pub verbose: bool,
    /// Disable all logging (the exit status still reports failures).
    #[arg(
        short,
        long,
        global = true,
        group = "verbosity",
        help_heading = "Log levels"
    )]
    pub silent: bool,
}

impl ClapLogLevelArgs {
    /// Convert the argument group into a log level, `None` when silent.
    pub fn level(&self) -> Option<Level> {
        if self.silent {
            None
        } else if self.verbose {
            Some(Level::TRACE)
        } else {
            Some(Level::INFO)
        }
    }
}

/// Run the toolchain smoke suite and exit non-zero if any case fails.
#[derive(Debug, clap::Parser)]
#[command(name = "smokecheck", version, about)]
pub struct Args {
    /// Override the expected literal of the hello case, e.g. 5.4999 to confirm failures get reported.
    /// Must be finite, NaN and infinities have no json representation in the report.
    #[arg(long, value_parser = parse_finite)]
    pub expected: Option<f64>,
    /// Print the report as JSON instead of the human readable summary.
    #[arg(long)]
    pub json: bool,
    /// Never colorize the summary (already off in CI).
    #[arg(long)]
    pub no_color: bool,
    /// Verbosity of the log output.
    #[command(flatten)]
    pub log_level: ClapLogLevelArgs,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let val: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(format!("'{}' isn't a finite number", s))
    }
}

impl Args {
    /// The suite these args describe.
    pub fn suite(&self) -> Suite {
        let hello = SmokeCase::hello();
        let hello = match self.expected {
            Some(expected) => hello.with_expected(expected),
            None => hello,
        };
        Suite::new().register(hello)
    }

    /// Whether the summary should be colorized.
    pub fn color(&self) -> bool {
        !self.no_color && !crate::misc::in_ci()
    }
}
