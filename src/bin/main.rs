use std::process;

use color_eyre::Result;
use env_logger::Target;
use n::{cli::input::parse_cli_args, utils::logger::config_logger, worker::run_n};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = match parse_cli_args(std::env::args_os()) {
        Ok(cli_args) => cli_args,
        Err(status) => process::exit(status.code()),
    };
    config_logger(cli_args.verbose, Target::Stderr)?;

    log::info!("Launching a new n program");
    let status = run_n(&cli_args)?;
    log::info!("Finished with exit code {status}");

    process::exit(status.code())
}
