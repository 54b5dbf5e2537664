mod global_log;

pub use global_log::{global_fns::*, GlobalLog, GlobalLogBuilder};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use parking_lot::Mutex;
    use rstest::*;
    use tracing::{debug, error, info, warn, Level};

    use super::*;
    use crate::errors::prelude::*;

    fn log_all() {
        debug!("DLOG");
        info!("ILOG");
        warn!("WLOG");
        error!("ELOG");
    }

    fn into_vec(logs: &Mutex<Vec<String>>) -> Vec<String> {
        logs.lock().clone()
    }

    #[rstest]
    fn test_log_formatting_basic(
        // All combinations of:
        #[values(true, false)] include_timestamp: bool,
        #[values(true, false)] include_loc: bool,
    ) -> RResult<(), AnyErr> {
        static LOGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
        {
            // Fn repeat usage so static needs clearing each time:
            LOGS.lock().clear();
        }

        let log = GlobalLog::builder()
            .custom(false, include_loc, false, include_timestamp, |log| {
                LOGS.lock()
                    .push(String::from_utf8_lossy(log).trim().to_string());
            })
            .level_from(Level::DEBUG)?
            .build()?;
        log.with_tmp_global(log_all)?;

        let chk_log = |lvl: Level, in_log: &str, out_log: &str| -> RResult<(), AnyErr> {
            // Lvl should always be included:
            assert!(
                out_log.contains(&lvl.to_string().to_uppercase()),
                "{}",
                out_log
            );
            if include_loc {
                assert!(out_log.contains("mod.rs"), "{}", out_log);
            }
            if include_timestamp {
                // Confirm matches regex HH:MM:SS.mmm:
                assert!(regex::Regex::new(r"\d{2}:\d{2}:\d{2}.\d{3}")
                    .change_context(AnyErr)?
                    .is_match(out_log));
            }
            assert!(
                out_log.contains(in_log),
                "Expected to contain: '{}', out: '{}'",
                in_log,
                out_log
            );

            Ok(())
        };

        let out = into_vec(&LOGS);
        assert_eq!(out.len(), 4, "{:?}", out);
        chk_log(Level::DEBUG, "DLOG", &out[0])?;
        chk_log(Level::INFO, "ILOG", &out[1])?;
        chk_log(Level::WARN, "WLOG", &out[2])?;
        chk_log(Level::ERROR, "ELOG", &out[3])?;

        Ok(())
    }

    #[rstest]
    #[case(Level::DEBUG, vec!["DLOG", "ILOG", "WLOG", "ELOG"])]
    #[case(Level::INFO, vec!["ILOG", "WLOG", "ELOG"])]
    #[case(Level::WARN, vec!["WLOG", "ELOG"])]
    #[case(Level::ERROR, vec!["ELOG"])]
    fn test_log_filtering(
        #[case] level_from: Level,
        #[case] expected_found: Vec<&str>,
    ) -> RResult<(), AnyErr> {
        static LOGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
        {
            LOGS.lock().clear();
        }

        let log = GlobalLog::builder()
            .custom(false, false, false, false, |log| {
                LOGS.lock()
                    .push(String::from_utf8_lossy(log).trim().to_string());
            })
            .level_from(level_from)?
            .build()?;

        log.with_tmp_global(log_all)?;

        let out = into_vec(&LOGS);
        assert_eq!(out.len(), expected_found.len());
        let mut remaining = HashSet::<&str>::from_iter(expected_found.iter().cloned());
        for log in out.iter() {
            let matched = remaining.iter().find(|m| log.contains(*m)).cloned();
            match matched {
                Some(m) => {
                    remaining.remove(m);
                }
                None => panic!(
                    "Unexpected log: {}. Level from: {:?}, all LOGS: {:?}",
                    log, level_from, out
                ),
            }
        }
        assert_eq!(remaining.len(), 0);

        Ok(())
    }

    #[rstest]
    fn test_level_from_needs_output() {
        assert!(GlobalLog::builder().level_from(Level::DEBUG).is_err());
    }

    /// - record_exception() comes out as an exception event.
    /// - panics are auto recorded as exception events.
    #[rstest]
    fn test_exception_recording() -> RResult<(), AnyErr> {
        static LOGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
        {
            LOGS.lock().clear();
        }

        let log = GlobalLog::builder()
            .custom(false, false, false, false, |log| {
                LOGS.lock()
                    .push(String::from_utf8_lossy(log).trim().to_string());
            })
            .build()?;

        log.with_tmp_global(|| {
            record_exception("test_exc", "test_stack");
            let _ = std::panic::catch_unwind(|| {
                panic!("test_panic");
            });
        })?;

        let out = into_vec(&LOGS);
        assert_eq!(out.len(), 2, "{:?}", out);
        assert!(out[0].contains("test_exc"), "{}", out[0]);
        assert!(out[0].contains("test_stack"), "{}", out[0]);
        assert!(out[0].contains("log/mod.rs"), "{}", out[0]);
        assert!(out[1].contains("test_panic"), "{}", out[1]);
        assert!(out[1].contains("Panic"), "{}", out[1]);

        Ok(())
    }

    #[rstest]
    fn test_include_color_needs_output() {
        assert!(GlobalLog::builder().include_color(false).is_err());
    }

    #[rstest]
    #[case::on(true)]
    #[case::off(false)]
    fn test_include_color_reaches_output(
        #[case] include_color: bool,
    ) -> RResult<(), AnyErr> {
        static LOGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
        {
            LOGS.lock().clear();
        }

        // Custom output starts with the opposite setting, the override should win:
        let log = GlobalLog::builder()
            .custom(false, false, !include_color, false, |log| {
                LOGS.lock()
                    .push(String::from_utf8_lossy(log).trim().to_string());
            })
            .include_color(include_color)?
            .build()?;
        log.with_tmp_global(|| info!("ILOG"))?;

        let out = into_vec(&LOGS);
        assert_eq!(out.len(), 1, "{:?}", out);
        assert_eq!(out[0].contains('\x1b'), include_color, "{:?}", out[0]);

        Ok(())
    }
}
