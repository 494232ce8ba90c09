//! Command-line argument parsing.
use clap::Parser;

/// Command-line entry point for the plugin.
///
/// Deployment parameters come from `PLUGIN_*` environment variables; the
/// flags here only control how the run is reported.
#[derive(Parser, Debug)]
#[command(
    name = "drone-pypi",
    about = "Write ~/.pypirc and upload Python distributions to a package index",
    version = version()
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, env = "PLUGIN_DEBUG")]
    pub verbose: bool,

    /// Preview the deployment without writing files or running commands
    #[arg(short = 'd', long, env = "PLUGIN_DRY_RUN")]
    pub dry_run: bool,
}

/// Version string, preferring the value stamped at build time.
#[must_use]
pub const fn version() -> &'static str {
    match option_env!("DRONE_PYPI_VERSION") {
        Some(version) => version,
        None => env!("CARGO_PKG_VERSION"),
    }
}
