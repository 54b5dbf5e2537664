use super::out::GLOBAL_LOG;
use crate::prelude::*;

/// Record an exception to the currently active span, making sure the record location is added to the stacktrace.
///
/// Arguments:
/// - `message`: Information about the exception e.g. `Exited with error.`.
/// - `stacktrace`: All of the location information for the exception, (maybe also the exception itself if e.g. from `Report<T>`).
#[track_caller]
pub fn record_exception(message: impl Into<String>, stacktrace: impl Into<String>) {
    let caller = std::panic::Location::caller();
    let stacktrace = stacktrace.into();
    let stacktrace = if stacktrace.trim().is_empty() {
        format!("╰╴at {}", caller)
    } else {
        format!("{}\n╰╴at {}", stacktrace, caller)
    };
    super::exceptions::record_exception_inner(message, stacktrace, "Err");
}

/// Shutdown and drop the global logger, blocking until buffered logs are written out.
/// A no-op when nothing was registered.
pub fn flush_and_consume() -> RResult<(), AnyErr> {
    let taken = GLOBAL_LOG.lock().take();
    if let Some(mut log) = taken {
        log.shutdown()?;
    }
    Ok(())
}
