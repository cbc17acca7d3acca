//! Yearly NaNoGenMo repository bootstrap.
//!
//! Each flag selects one step. Steps always run in the order listed in
//! `--help`, however the flags are given, and the first failure stops the run.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::debug;

use nanogenmo::context::{Context, Overrides};
use nanogenmo::exit_codes;
use nanogenmo::io::config::load_config;
use nanogenmo::io::process::SystemRunner;
use nanogenmo::logging;
use nanogenmo::plan::{Operation, follow_up_steps, run_operations};

#[derive(Parser, Debug)]
#[command(
    name = "nanogenmo",
    version,
    about = "Commands for generating a NaNoGenMo repo",
    after_help = "With no operation flag selected, prints this help and exits with status 2."
)]
struct Cli {
    /// Create this year's repo as a mirror of last year's.
    #[arg(long)]
    create_repo: bool,

    /// Clone this year's repo into the workspace.
    #[arg(long)]
    clone_repo: bool,

    /// Roll the cloned README forward a year, then commit and push.
    #[arg(long)]
    update_readme: bool,

    /// Copy last year's labels and delete GitHub's defaults.
    #[arg(long)]
    create_labels: bool,

    /// Open the "Resources" and "Press and other coverage" issues.
    #[arg(long)]
    create_issues: bool,

    /// Bootstrap this year instead of the current calendar year.
    #[arg(long, value_name = "YEAR")]
    year: Option<i32>,

    /// Directory holding the working clone.
    #[arg(long, value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Config file (defaults apply if it doesn't exist).
    #[arg(long, value_name = "FILE", default_value = "nanogenmo.toml")]
    config: PathBuf,

    /// Print commands without running them.
    #[arg(long)]
    dry_run: bool,

    /// Fail the README update if any expected text is missing.
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| match op {
                Operation::CreateRepo => self.create_repo,
                Operation::CloneRepo => self.clone_repo,
                Operation::UpdateReadme => self.update_readme,
                Operation::CreateLabels => self.create_labels,
                Operation::CreateIssues => self.create_issues,
            })
            .collect()
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let operations = cli.operations();
    if operations.is_empty() {
        eprintln!("no operation selected\n");
        let _ = Cli::command().print_help();
        std::process::exit(exit_codes::USAGE);
    }
    if let Err(err) = run(cli, &operations) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(cli: Cli, operations: &[Operation]) -> Result<()> {
    let config = load_config(&cli.config)?;
    let ctx = Context::new(
        config,
        Overrides {
            year: cli.year,
            workspace: cli.workspace,
            dry_run: cli.dry_run,
            strict: cli.strict,
        },
    );
    debug!(
        current = ctx.years.current,
        previous = ctx.years.previous,
        workspace = %ctx.workspace.display(),
        "resolved context"
    );

    let runner = SystemRunner::new(ctx.dry_run);
    run_operations(operations, &ctx, &runner)?;

    println!();
    println!("Remaining manual steps:");
    for step in follow_up_steps(&ctx) {
        println!("[ ] {step}");
    }
    Ok(())
}
