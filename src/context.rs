//! Startup context passed to the deploy pipeline.
use std::path::PathBuf;

use crate::error::DeployError;
use crate::exec::Executor;
use crate::logging::Log;
use crate::params::Params;

/// Everything the pipeline needs, resolved once at startup.
///
/// Business logic reads only from here, never from the process environment.
pub struct Context<'a> {
    /// Resolved deployment parameters.
    pub params: Params,
    /// Directory that receives `.pypirc`. Empty means the working directory.
    pub home: PathBuf,
    /// Base directory the upload path is joined onto.
    pub pwd: PathBuf,
    /// Preview actions without writing files or running commands.
    pub dry_run: bool,
    /// Command executor (a real system executor, or a mock in tests).
    pub executor: &'a dyn Executor,
    /// Logger for console output.
    pub log: &'a dyn Log,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("params", &self.params)
            .field("home", &self.home)
            .field("pwd", &self.pwd)
            .field("dry_run", &self.dry_run)
            .field("executor", &"<dyn Executor>")
            .field("log", &"<dyn Log>")
            .finish()
    }
}

impl<'a> Context<'a> {
    /// Build a context from the process environment.
    ///
    /// An unset or empty `HOME` becomes an empty base, so `.pypirc` lands in
    /// the process working directory. `PWD` falls back to the process working
    /// directory when unset or empty.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::MissingEnv`] if `PWD` is not set and the
    /// working directory cannot be determined.
    pub fn from_env(
        dry_run: bool,
        executor: &'a dyn Executor,
        log: &'a dyn Log,
    ) -> Result<Self, DeployError> {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default();
        let pwd = match std::env::var_os("PWD").filter(|v| !v.is_empty()) {
            Some(pwd) => PathBuf::from(pwd),
            None => std::env::current_dir()
                .map_err(|_| DeployError::MissingEnv("PWD".to_string()))?,
        };

        Ok(Self {
            params: Params::from_env(),
            home,
            pwd,
            dry_run,
            executor,
            log,
        })
    }
}
