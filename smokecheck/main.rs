use std::process::ExitCode;

use clap::Parser;
use smokecheck::{cli::Args, errors::prelude::*, log::GlobalLog, misc::main_wrapper};

fn main() -> ExitCode {
    main_wrapper(|| {
        let args = Args::parse();

        if let Some(level) = args.log_level.level() {
            // Stdout has to stay a clean json document when one is requested:
            let builder = if args.json {
                GlobalLog::builder().stderr(false, false)
            } else {
                GlobalLog::builder().stdout(false, false)
            };
            builder
                .level_from(level)?
                .include_color(args.color())?
                .build()?
                .register_global()?;
        }

        let report = args.suite().run(&mut std::io::stdout().lock())?;
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).change_context(AnyErr)?
            );
        } else {
            print!("{}", report.render(args.color()));
        }

        Ok(report.exit_code().into())
    })
}
