// Shared helpers for integration tests.
//
// Provides an executor that records commands instead of running them, and a
// helper to resolve parameters from a fixed set of variables without touching
// the process environment.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use drone_pypi::error::DeployError;
use drone_pypi::exec::{CommandLine, Executor};
use drone_pypi::params::Params;

/// Sample plugin settings used by end-to-end tests.
pub const SAMPLE_ENV: &[(&str, &str)] = &[
    ("PLUGIN_REPOSITORY", "https://upload.example.org/legacy/"),
    ("PLUGIN_USERNAME", "ci-bot"),
    ("PLUGIN_PASSWORD", "s3cr3t-token"),
    ("PLUGIN_UPLOAD_PATH", "python/pkg"),
    ("PLUGIN_DISTRIBUTIONS", "sdist,bdist_wheel"),
];

/// Resolve [`Params`] from `pairs` as if they were the only variables set.
pub fn params_from(pairs: &[(&str, &str)]) -> Params {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Params::resolve(|key| env.get(key).cloned())
}

/// An [`Executor`] that records every command and optionally fails it.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<CommandLine>>,
    exit_code: Option<i32>,
}

impl RecordingExecutor {
    /// Record commands and report success.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record commands and report that they exited with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_code: Some(code),
        }
    }

    /// All commands seen so far, in order.
    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Executor for RecordingExecutor {
    fn run_streaming(&self, cmd: &CommandLine) -> Result<(), DeployError> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(cmd.clone());
        match self.exit_code {
            None => Ok(()),
            Some(code) => Err(DeployError::UploadFailed {
                command: cmd.to_string(),
                code: Some(code),
            }),
        }
    }
}
