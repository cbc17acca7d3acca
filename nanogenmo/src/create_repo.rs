//! Create this year's repository as a mirror of last year's.
//!
//! The new repository is created empty on GitHub, then last year's history
//! (every branch and tag) is bare-cloned into a scratch directory and
//! mirror-pushed into it. A failure part-way leaves the remote as-is.

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::info;

use crate::context::Context;
use crate::io::gh::Gh;
use crate::io::git::Git;
use crate::io::process::CommandRunner;
use crate::io::scratch::{create_scratch, remove_scratch};

pub fn create_repo<R: CommandRunner + ?Sized>(ctx: &Context, runner: &R) -> Result<()> {
    let repo_url = ctx.new_repo_url();
    println!("Creating {repo_url}...");
    println!();

    let scratch = create_scratch(ctx.config.scratch_root.as_deref())?;
    let result = mirror_previous_year(ctx, runner, scratch.path());
    remove_scratch(scratch);
    result.with_context(|| format!("create {repo_url}"))?;

    info!(repo = %repo_url, "repository created");
    println!("Created: {repo_url}");
    Ok(())
}

fn mirror_previous_year<R: CommandRunner + ?Sized>(
    ctx: &Context,
    runner: &R,
    scratch: &Path,
) -> Result<()> {
    Gh::new(runner, scratch).create_private_repo(&ctx.years.current.to_string())?;
    Git::new(runner, scratch).clone_bare(&ctx.previous_repo_git_url())?;

    let bare = scratch.join(format!("{}.git", ctx.years.previous));
    Git::new(runner, bare).push_mirror(&ctx.new_repo_git_url())?;
    Ok(())
}
