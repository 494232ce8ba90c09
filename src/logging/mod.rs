//! Logging infrastructure for structured console output.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::Log;

/// Target for stage headers (`==> ...`).
pub(crate) const STAGE_TARGET: &str = "drone_pypi::stage";
/// Target for dry-run action lines.
pub(crate) const DRY_RUN_TARGET: &str = "drone_pypi::dry_run";
