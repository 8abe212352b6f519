mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, report};
use svcmap_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    print::banner(commands.no_banner, commands.quiet);

    match run(commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(commands: CommandLine) -> anyhow::Result<()> {
    let cfg: Config = commands.into_config()?;

    print::header("getting ready for report", cfg.quiet);
    report::report(&cfg)
}
