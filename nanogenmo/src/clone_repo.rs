//! Clone this year's repository into the workspace.

use std::fs;

use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::io::git::Git;
use crate::io::process::CommandRunner;

/// Clone into `<workspace>/<current>`.
///
/// The target must not already hold a clone; git refuses a non-empty target.
pub fn clone_repo<R: CommandRunner + ?Sized>(ctx: &Context, runner: &R) -> Result<()> {
    if !ctx.dry_run {
        fs::create_dir_all(&ctx.workspace)
            .with_context(|| format!("create workspace {}", ctx.workspace.display()))?;
    }
    Git::new(runner, &ctx.workspace).clone_into(&ctx.new_repo_url(), &ctx.clone_dir())
}
