//! Copy last year's labels and drop GitHub's defaults.

use anyhow::Result;
use tracing::debug;

use crate::context::Context;
use crate::core::labels::DEFAULT_LABELS;
use crate::io::gh::Gh;
use crate::io::process::CommandRunner;

pub fn seed_labels<R: CommandRunner + ?Sized>(ctx: &Context, runner: &R) -> Result<()> {
    let gh = Gh::new(runner, ctx.clone_dir());
    gh.clone_labels(&ctx.previous_repo_slug())?;
    gh.list_labels()?;
    for label in DEFAULT_LABELS {
        debug!(label, "deleting default label");
        gh.delete_label(label)?;
    }
    gh.list_labels()?;
    println!("{}", ctx.labels_url());
    Ok(())
}
