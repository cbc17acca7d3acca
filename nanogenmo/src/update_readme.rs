//! Roll the cloned README forward a year, then commit and push it.

use std::fs;

use anyhow::{Context as _, Result, bail};
use tracing::{info, warn};

use crate::context::Context;
use crate::core::readme::{ReadmeUpdate, apply_replacements, commit_message, replacements};
use crate::io::git::Git;
use crate::io::process::CommandRunner;

pub const README_FILE: &str = "README.md";

/// Update `<clone>/README.md` and push the change.
///
/// Missing patterns are logged; in strict mode they abort the update before
/// anything is written. When no replacement applied, nothing is committed.
///
/// A dry run with no clone on disk (the clone step only echoed its command)
/// echoes the git commands it would run and returns `None`.
pub fn update_readme<R: CommandRunner + ?Sized>(
    ctx: &Context,
    runner: &R,
) -> Result<Option<ReadmeUpdate>> {
    let path = ctx.clone_dir().join(README_FILE);
    if ctx.dry_run && !path.exists() {
        println!("{} not present, skipping substitutions", path.display());
        commit_and_push(ctx, runner)?;
        return Ok(None);
    }
    let readme = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;

    let update = apply_replacements(
        &readme,
        replacements(ctx.years, &ctx.config.host, &ctx.config.org),
    );

    let missing = update.missing();
    for replacement in &missing {
        warn!(pattern = %replacement.old, "README pattern not found");
    }
    if ctx.strict_readme && !missing.is_empty() {
        let patterns: Vec<&str> = missing.iter().map(|r| r.old.as_str()).collect();
        bail!(
            "{} is missing expected text:\n- {}",
            path.display(),
            patterns.join("\n- ")
        );
    }

    if !update.changed() {
        info!("README unchanged");
        println!("{} unchanged, nothing to commit", path.display());
        return Ok(Some(update));
    }

    println!("{}", update.text);
    if !ctx.dry_run {
        fs::write(&path, &update.text).with_context(|| format!("write {}", path.display()))?;
    }

    commit_and_push(ctx, runner)?;
    Ok(Some(update))
}

fn commit_and_push<R: CommandRunner + ?Sized>(ctx: &Context, runner: &R) -> Result<()> {
    let git = Git::new(runner, ctx.clone_dir());
    git.add(README_FILE)?;
    git.commit(&commit_message(ctx.years))?;
    git.push()
}
