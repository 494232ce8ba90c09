//! Error types for the deployment pipeline.
//!
//! Library code returns [`DeployError`]; the binary converts it to
//! [`anyhow::Error`] at the CLI boundary via the standard `?` operator.
//!
//! ```text
//! DeployError
//! ├── MissingEnv   : working directory unavailable (PWD)
//! ├── ConfigWrite  : creating or writing ~/.pypirc
//! ├── Spawn        : uploader could not be started
//! └── UploadFailed : uploader exited non-zero
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a deployment.
///
/// Every variant is fatal: the run stops at the first one and the process
/// exits with a non-zero status.
#[derive(Error, Debug)]
pub enum DeployError {
    /// A required environment variable is not set.
    #[error("{0} environment variable is not set")]
    MissingEnv(String),

    /// The credentials file could not be created, written or flushed.
    #[error("failed to write {}", .path.display())]
    ConfigWrite {
        /// Path of the credentials file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The uploader process could not be started.
    #[error("failed to execute: {command}")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// Underlying spawn error.
        source: io::Error,
    },

    /// The uploader process ran and exited unsuccessfully.
    #[error("{command} failed (exit {})", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    UploadFailed {
        /// The command line that was run.
        command: String,
        /// Exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
    },
}
