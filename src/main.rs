//! Main entry point for the acidrun CLI application.
//!
//! Wires the subprocess-backed index and validator into the acquisition
//! loop and maps the run's outcome onto the process exit code: 0 for a
//! normal stop (list exhausted, budget spent), 1 when the validator
//! rejects a candidate, 2 for operational errors.

use std::process::ExitCode;

use clap::Parser;
use log::error;

use acidrun::{Cli, CommandValidator, RunOutcome, Runner, ScratchSpace, ToolIndex};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let index = ToolIndex::new(cli.index_tool.as_str());
    let validator = CommandValidator::new(cli.validator.as_str(), cli.validator_args.clone());
    let scratch = ScratchSpace::new(cli.scratch_root.clone());

    let mut runner = Runner::new(&index, &validator, scratch, cli.budget());
    match runner.run(cli.packages.clone()) {
        Ok(RunOutcome::Completed) => {
            report_checked(runner.checked());
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::ValidationFailed { package }) => {
            error!("validator failed on {package}");
            ExitCode::from(1)
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

/// Final visibility report on a normal stop.
fn report_checked(checked: &[String]) {
    if !checked.is_empty() {
        println!("\nTested packages:\n    {}", checked.join("\n    "));
    }
}
