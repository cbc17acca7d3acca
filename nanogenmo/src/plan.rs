//! Which operations a run performs, and in what order.

use anyhow::Result;
use tracing::info;

use crate::clone_repo::clone_repo;
use crate::context::Context;
use crate::create_repo::create_repo;
use crate::io::process::CommandRunner;
use crate::seed_issues::seed_issues;
use crate::seed_labels::seed_labels;
use crate::update_readme::update_readme;

/// A single bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateRepo,
    CloneRepo,
    UpdateReadme,
    CreateLabels,
    CreateIssues,
}

impl Operation {
    /// Every operation, in execution order.
    pub const ALL: [Operation; 5] = [
        Operation::CreateRepo,
        Operation::CloneRepo,
        Operation::UpdateReadme,
        Operation::CreateLabels,
        Operation::CreateIssues,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateRepo => "create-repo",
            Operation::CloneRepo => "clone-repo",
            Operation::UpdateReadme => "update-readme",
            Operation::CreateLabels => "create-labels",
            Operation::CreateIssues => "create-issues",
        }
    }

    pub fn run<R: CommandRunner + ?Sized>(self, ctx: &Context, runner: &R) -> Result<()> {
        match self {
            Operation::CreateRepo => create_repo(ctx, runner),
            Operation::CloneRepo => clone_repo(ctx, runner),
            Operation::UpdateReadme => update_readme(ctx, runner).map(|_| ()),
            Operation::CreateLabels => seed_labels(ctx, runner),
            Operation::CreateIssues => seed_issues(ctx, runner),
        }
    }
}

/// Run the selected operations in [`Operation::ALL`] order, stopping at the first failure.
pub fn run_operations<R: CommandRunner + ?Sized>(
    selected: &[Operation],
    ctx: &Context,
    runner: &R,
) -> Result<()> {
    for op in Operation::ALL {
        if !selected.contains(&op) {
            continue;
        }
        info!(
            operation = op.name(),
            year = ctx.years.current,
            "running operation"
        );
        op.run(ctx, runner)?;
    }
    Ok(())
}

/// Manual steps that remain once the repository is seeded.
pub fn follow_up_steps(ctx: &Context) -> Vec<String> {
    vec![
        format!("check other repo settings at {}/settings", ctx.new_repo_url()),
        format!("transfer {} to the {} org", ctx.new_repo_url(), ctx.config.org),
        "make the repository public".to_string(),
        format!(
            "add a redirect to {} from {}/{}/{}",
            ctx.years.current, ctx.config.host, ctx.config.org, ctx.years.previous
        ),
        format!(
            "add {} to {}/{org}/{org_lower}.github.io/blob/main/index.html",
            ctx.years.current,
            ctx.config.host,
            org = ctx.config.org,
            org_lower = ctx.config.org.to_lowercase()
        ),
    ]
}
