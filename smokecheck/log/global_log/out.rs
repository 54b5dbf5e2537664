use parking_lot::Mutex;
use tracing::{Dispatch, Level};

use crate::errors::prelude::*;

pub static GLOBAL_LOG: Mutex<Option<GlobalLog>> = Mutex::new(None);

/// The global logger for stdout and custom writers. Works with the tracing crates (info!, debug!, warn!, error!) and span funcs.
///
/// Examples:
///
/// ```
/// use smokecheck::log::GlobalLog;
/// use tracing::Level;
///
/// let log = GlobalLog::builder()
///             .stdout(true, false)
///             .level_from(Level::DEBUG).unwrap() // Debug and up for stdout, each defaults to INFO
///             .build().unwrap();
/// log.register_global().unwrap(); // Register it as the global sub, this can only be done once
/// ```
pub struct GlobalLog {
    /// Tracing dispatcher, needed to make the global logger.
    pub(crate) dispatch: Option<Dispatch>,

    /// Need to store these guards, when they go out of scope the logging may stop.
    /// When made global these are hoisted into the static.
    pub(crate) _guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
}

impl GlobalLog {
    /// Create a builder to configure the global logger.
    pub fn builder() -> super::builder::GlobalLogBuilder {
        super::builder::GlobalLogBuilder::default()
    }

    /// A managed wrapper on creation of the GlobalLog and registering it as the global logger.
    ///
    /// Sets up console logging only.
    pub fn setup_quick_stdout_global_logging(level_from: Level) -> RResult<(), AnyErr> {
        GlobalLog::builder()
            .stdout(true, false)
            .level_from(level_from)?
            .build()?
            .register_global()?;
        Ok(())
    }

    /// Register the logger as the global logger, can only be done once during the lifetime of the program.
    ///
    /// If you need temporary globality, use the [`GlobalLog::with_tmp_global`] method.
    pub fn register_global(mut self) -> RResult<(), AnyErr> {
        if let Some(dispatch) = self.dispatch.take() {
            tracing::dispatcher::set_global_default(dispatch).change_context(AnyErr)?;
            GLOBAL_LOG.lock().replace(self);
            Ok(())
        } else {
            Err(anyerr!("Already registered!"))
        }
    }

    /// Temporarily make the logger global, for the duration of the given closure.
    ///
    /// If you want to make the logger global permanently, use the [`GlobalLog::register_global`] method.
    pub fn with_tmp_global<T>(&self, f: impl FnOnce() -> T) -> RResult<T, AnyErr> {
        if let Some(dispatch) = &self.dispatch.as_ref() {
            Ok(tracing::dispatcher::with_default(dispatch, f))
        } else {
            Err(anyerr!("GlobalLog missing internal dispatch object! Remember the dispatcher is taken during the register_global() method and cannot be reused."))
        }
    }

    /// Drain the non-blocking writers, see [`super::global_fns::flush_and_consume`].
    pub fn shutdown(&mut self) -> RResult<(), AnyErr> {
        use std::io::Write;

        // Dropping the guards blocks until the non-blocking workers have written everything out:
        self._guards.clear();
        std::io::stdout().flush().change_context(AnyErr)?;
        std::io::stderr().flush().change_context(AnyErr)?;
        Ok(())
    }
}
