//! External process execution.
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::DeployError;

/// A fully assembled command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program to run, resolved through `PATH`.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Working directory for the child process.
    pub dir: PathBuf,
}

impl fmt::Display for CommandLine {
    /// Space-joined program and arguments, without quoting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs commands on behalf of the deploy pipeline.
///
/// The real implementation is [`SystemExecutor`]; tests substitute a mock to
/// record calls without spawning processes.
#[cfg_attr(test, mockall::automock)]
pub trait Executor {
    /// Run `cmd` to completion with stdout and stderr inherited from the
    /// current process.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Spawn`] if the process cannot be started and
    /// [`DeployError::UploadFailed`] if it exits unsuccessfully.
    fn run_streaming(&self, cmd: &CommandLine) -> Result<(), DeployError>;
}

/// Executes commands on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_streaming(&self, cmd: &CommandLine) -> Result<(), DeployError> {
        let spawn_err = |source| DeployError::Spawn {
            command: cmd.to_string(),
            source,
        };

        let program = which::which(&cmd.program)
            .map_err(|e| spawn_err(io::Error::new(io::ErrorKind::NotFound, e)))?;
        tracing::debug!("resolved {} to {}", cmd.program, program.display());

        let status = Command::new(program)
            .args(&cmd.args)
            .current_dir(&cmd.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(spawn_err)?;

        if status.success() {
            Ok(())
        } else {
            Err(DeployError::UploadFailed {
                command: cmd.to_string(),
                code: status.code(),
            })
        }
    }
}
