//! The deploy pipeline: write `~/.pypirc`, then upload.
use crate::context::Context;
use crate::error::DeployError;
use crate::exec::CommandLine;
use crate::pypirc;
use crate::upload;

/// Write the credentials file, then run the uploader.
///
/// Stops at the first error. A credentials file already written is left in
/// place when the upload fails.
///
/// # Errors
///
/// Returns the first [`DeployError`] raised by either step.
pub fn deploy(ctx: &Context<'_>) -> Result<CommandLine, DeployError> {
    create_config(ctx)?;
    upload_dist(ctx)
}

fn create_config(ctx: &Context<'_>) -> Result<(), DeployError> {
    ctx.log.stage("Writing package index credentials");
    let path = pypirc::config_path(&ctx.home);
    ctx.log.debug(&format!("{:?}", ctx.params));

    if ctx.dry_run {
        ctx.log.dry_run(&format!("would write {}", path.display()));
        return Ok(());
    }

    let path = pypirc::create_config(&ctx.home, &ctx.params)?;
    ctx.log.info(&format!(
        "wrote {} (repository: {})",
        path.display(),
        ctx.params.repository
    ));
    Ok(())
}

fn upload_dist(ctx: &Context<'_>) -> Result<CommandLine, DeployError> {
    ctx.log.stage("Uploading distributions");
    upload::upload_dist(ctx)
}
