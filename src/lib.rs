//! Drone plugin for publishing Python packages.
//!
//! Reads `PLUGIN_*` settings from the environment, writes a `~/.pypirc`
//! credentials file and runs `python setup.py <dists> upload -r pypi` in the
//! package directory.
//!
//! - **[`params`]**: resolve settings from the environment, with defaults
//! - **[`pypirc`]**: render and write the credentials file
//! - **[`upload`]**: build and run the uploader command
//! - **[`deploy`]**: run both steps in order, stopping at the first error
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]
// `mockall` generates undocumented public mocks in test builds.
#![cfg_attr(test, allow(missing_docs))]

pub mod cli;
pub mod context;
pub mod deploy;
pub mod error;
pub mod exec;
pub mod logging;
pub mod params;
pub mod pypirc;
pub mod upload;
