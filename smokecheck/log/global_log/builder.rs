use tracing::Level;

use super::GlobalLog;
use crate::prelude::*;

#[derive(Clone)]
/// Shared that can be set for all output types
pub struct SharedOpts {
    pub level_from: Level,
}

impl Default for SharedOpts {
    fn default() -> Self {
        Self {
            level_from: Level::INFO,
        }
    }
}

/// Shared by the stdout and stderr outputs.
pub struct StdioConf {
    /// When enabled, logs will be formatted more verbosely, but neater on the eyes.
    pub pretty: bool,
    /// Include the log location (file and line) in each log, defaults to false
    pub include_loc: bool,
    /// Whether to include color codes, turned off automatically in CI.
    pub include_color: bool,
    pub shared: SharedOpts,
}

#[derive(Clone)]
pub struct CustomConf {
    /// When enabled, logs will be formatted more verbosely, but neater on the eyes.
    pub pretty: bool,
    /// Include the log location (file and line) in each log, defaults to false
    pub include_loc: bool,
    /// Include the timestamp in each log, defaults to false
    pub include_ts: bool,
    /// The fn to handle writing, passed the raw byte string.
    /// If needing a string, can do:
    ///
    /// `let log = String::from_utf8_lossy(log);`
    pub write: fn(&[u8]),
    /// Whether to include the color codes in the output.
    pub include_color: bool,
    pub shared: SharedOpts,
}

/// The global log builder. See the [`GlobalLog`] struct for more information.
#[derive(Default)]
pub struct GlobalLogBuilder {
    pub(crate) outputs: Vec<Output>,
}

fn stdio_conf(pretty: bool, include_loc: bool) -> StdioConf {
    StdioConf {
        pretty,
        include_loc,
        include_color: !crate::misc::in_ci(),
        shared: SharedOpts::default(),
    }
}

impl GlobalLogBuilder {
    /// Build the global log from the configured builder.
    pub fn build(self) -> RResult<GlobalLog, AnyErr> {
        super::setup::builder_into_global_log(self)
    }

    /// Write to stdout:
    ///
    /// Arguments:
    /// - `pretty`: When enabled, logs are formatted more verbosely, but easier on the eyes.
    /// - `include_loc`: When enabled, log contains write location (file and line).
    pub fn stdout(mut self, pretty: bool, include_loc: bool) -> Self {
        self.outputs.push(Output::Stdout(stdio_conf(pretty, include_loc)));
        self
    }

    /// Write to stderr, keeps stdout free for program output e.g. a json document.
    ///
    /// Arguments are the same as [`GlobalLogBuilder::stdout`].
    pub fn stderr(mut self, pretty: bool, include_loc: bool) -> Self {
        self.outputs.push(Output::Stderr(stdio_conf(pretty, include_loc)));
        self
    }

    /// Write to a custom writer.
    ///
    /// Arguments:
    /// - `pretty`: When enabled, logs are formatted more verbosely, but easier on the eyes.
    /// - `include_loc`: When enabled, log contains write location (file and line).
    /// - `include_color`: When enabled, log contains colors.
    /// - `include_ts`: When enabled, log contains timestamp.
    /// - `writer`: The fn to handle writing, passed the raw byte string.
    pub fn custom(
        mut self,
        pretty: bool,
        include_loc: bool,
        include_color: bool,
        include_ts: bool,
        writer: fn(&[u8]),
    ) -> Self {
        self.outputs.push(Output::Custom(CustomConf {
            pretty,
            include_loc,
            include_color,
            include_ts,
            write: writer,
            shared: SharedOpts::default(),
        }));
        self
    }

    /// Set the minimum level to log for.
    ///
    /// NOTE: Applies to the last set output type only.
    pub fn level_from(mut self, level: Level) -> RResult<Self, AnyErr> {
        let shared = self.get_active_shared()?;
        shared.level_from = level;
        Ok(self)
    }

    /// Turn color codes on or off, stdout/stderr default to on outside of CI.
    ///
    /// NOTE: Applies to the last set output type only.
    pub fn include_color(mut self, include_color: bool) -> RResult<Self, AnyErr> {
        match self.outputs.last_mut() {
            Some(Output::Stdout(conf)) | Some(Output::Stderr(conf)) => {
                conf.include_color = include_color
            }
            Some(Output::Custom(conf)) => conf.include_color = include_color,
            None => {
                return Err(anyerr!(
                    "No output set yet to apply this value to. Set an output first."
                ))
            }
        }
        Ok(self)
    }

    fn get_active_shared(&mut self) -> RResult<&mut SharedOpts, AnyErr> {
        if let Some(output) = self.outputs.last_mut() {
            Ok(match output {
                Output::Stdout(conf) | Output::Stderr(conf) => &mut conf.shared,
                Output::Custom(conf) => &mut conf.shared,
            })
        } else {
            Err(anyerr!(
                "No output set yet to apply this value to. Set an output first."
            ))
        }
    }
}

pub enum Output {
    Stdout(StdioConf),
    Stderr(StdioConf),
    Custom(CustomConf),
}
