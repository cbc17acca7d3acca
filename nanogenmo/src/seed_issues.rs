//! Open the two standing discussion issues.

use std::io::Write;

use anyhow::{Context as _, Result};
use tempfile::{Builder, NamedTempFile};

use crate::context::Context;
use crate::core::issues::{IssueDraft, coverage_issue, resources_issue};
use crate::io::gh::Gh;
use crate::io::process::CommandRunner;

pub fn seed_issues<R: CommandRunner + ?Sized>(ctx: &Context, runner: &R) -> Result<()> {
    let drafts = [
        resources_issue(ctx.years, ctx.issue_links()),
        coverage_issue(ctx.years, ctx.issue_links()),
    ];

    // Write both bodies before creating either issue.
    let bodies = drafts
        .iter()
        .map(write_body)
        .collect::<Result<Vec<_>>>()?;

    let gh = Gh::new(runner, ctx.clone_dir());
    for (draft, body) in drafts.iter().zip(&bodies) {
        gh.create_issue(&ctx.config.issue_label, body.path(), draft.title)?;
    }
    gh.list_issues()?;
    Ok(())
}

fn write_body(draft: &IssueDraft) -> Result<NamedTempFile> {
    let mut file = Builder::new()
        .prefix("nanogenmo-issue-")
        .suffix(".md")
        .tempfile()
        .context("create issue body file")?;
    file.write_all(draft.body.as_bytes())
        .with_context(|| format!("write body for {}", draft.title))?;
    file.flush().context("flush issue body")?;
    Ok(file)
}
