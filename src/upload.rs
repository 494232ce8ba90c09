//! Building and running the `setup.py ... upload` command.
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::DeployError;
use crate::exec::CommandLine;
use crate::params::Params;
use crate::pypirc::INDEX_SERVER;

/// Interpreter used to run `setup.py`.
pub const PYTHON: &str = "python";

/// Distribution format used when none are configured.
pub const DEFAULT_DISTRIBUTION: &str = "sdist";

/// Arguments passed to the interpreter:
/// `setup.py <dists...> upload -r pypi`.
///
/// An empty distribution list becomes `["sdist"]`; otherwise the list is used
/// verbatim, in order.
#[must_use]
pub fn upload_args(distributions: &[String]) -> Vec<String> {
    let mut args = vec!["setup.py".to_string()];
    if distributions.is_empty() {
        args.push(DEFAULT_DISTRIBUTION.to_string());
    } else {
        args.extend(distributions.iter().cloned());
    }
    args.extend(["upload", "-r", INDEX_SERVER].map(String::from));
    args
}

/// Directory the uploader runs in: `pwd` joined with `upload_path`.
///
/// The upload path is always taken relative to `pwd`, even when it starts
/// with a separator. An empty upload path yields `pwd` itself. The result is
/// not lexically cleaned: `.` and `..` segments are kept as given.
#[must_use]
pub fn upload_dir(pwd: &Path, upload_path: &str) -> PathBuf {
    #[cfg(windows)]
    let relative = upload_path.trim_start_matches(['/', '\\']);
    #[cfg(not(windows))]
    let relative = upload_path.trim_start_matches('/');
    if relative.is_empty() {
        pwd.to_path_buf()
    } else {
        pwd.join(relative)
    }
}

/// Build the complete upload command for `params`, rooted at `pwd`.
#[must_use]
pub fn upload_command(params: &Params, pwd: &Path) -> CommandLine {
    CommandLine {
        program: PYTHON.to_string(),
        args: upload_args(&params.distributions),
        dir: upload_dir(pwd, &params.upload_path),
    }
}

/// Echo the command line to stdout, shell-transcript style.
#[allow(clippy::print_stdout)]
fn echo(cmd: &CommandLine) {
    println!("$ {cmd}");
}

/// Run the upload command through the context's executor.
///
/// The command line is echoed as `$ python setup.py ...` before it runs; in
/// dry-run mode it is only logged.
///
/// # Errors
///
/// Returns [`DeployError::Spawn`] or [`DeployError::UploadFailed`] from the
/// executor.
pub fn upload_dist(ctx: &Context<'_>) -> Result<CommandLine, DeployError> {
    let cmd = upload_command(&ctx.params, &ctx.pwd);
    ctx.log.debug(&format!("working directory: {}", cmd.dir.display()));

    if ctx.dry_run {
        ctx.log.dry_run(&format!("would run: {cmd}"));
        return Ok(cmd);
    }

    echo(&cmd);
    ctx.executor.run_streaming(&cmd)?;
    Ok(cmd)
}
