//! `drone-pypi` binary.
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use drone_pypi::cli::{self, Cli};
use drone_pypi::context::Context;
use drone_pypi::deploy;
use drone_pypi::exec::SystemExecutor;
use drone_pypi::logging::{self, Logger};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger::new();

    match run(&args, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli, log: &Logger) -> Result<()> {
    log.debug(&format!("drone-pypi {}", cli::version()));
    let executor = SystemExecutor;
    let ctx = Context::from_env(args.dry_run, &executor, log)?;
    deploy::deploy(&ctx)?;
    Ok(())
}
