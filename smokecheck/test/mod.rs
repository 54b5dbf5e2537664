/// Useful rstest fixtures.
pub mod fixtures;

/// Default modules to bring into scope within test modules.
pub mod prelude {
    pub use rstest::*;

    pub use crate::prelude::*;
    pub use crate::test::fixtures::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::smoke::Suite;

    #[rstest]
    fn test_suite_runs_with_global_logging(
        #[allow(unused_variables)] logging: (),
    ) -> RResult<(), AnyErr> {
        let report = Suite::with_defaults().run(&mut std::io::stdout())?;
        assert!(report.all_passed());
        Ok(())
    }
}
