//! GitHub CLI (`gh`) adapter.
//!
//! `gh` resolves the target repository from its working directory, so label
//! and issue commands must run inside a clone.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::instrument;

use super::process::{CommandLine, CommandRunner};

pub struct Gh<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    workdir: PathBuf,
}

impl<'a, R: CommandRunner + ?Sized> Gh<'a, R> {
    pub fn new(runner: &'a R, workdir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            workdir: workdir.into(),
        }
    }

    /// `gh repo create <name> --private`.
    #[instrument(skip(self))]
    pub fn create_private_repo(&self, name: &str) -> Result<()> {
        self.run(&["repo", "create", name, "--private"])
    }

    /// `gh label clone <source>`, copying every label from `source` (`owner/repo`).
    #[instrument(skip(self))]
    pub fn clone_labels(&self, source: &str) -> Result<()> {
        self.run(&["label", "clone", source])
    }

    pub fn list_labels(&self) -> Result<()> {
        self.run(&["label", "list"])
    }

    #[instrument(skip(self))]
    pub fn delete_label(&self, name: &str) -> Result<()> {
        self.run(&["label", "delete", "--yes", name])
    }

    /// `gh issue create --label <label> --body-file <file> --title <title>`.
    #[instrument(skip(self, body_file), fields(body_file = %body_file.display()))]
    pub fn create_issue(&self, label: &str, body_file: &Path, title: &str) -> Result<()> {
        let command = CommandLine::new("gh")
            .args(["issue", "create", "--label", label, "--body-file"])
            .arg(body_file.as_os_str())
            .args(["--title", title]);
        self.runner.run(&command, &self.workdir)
    }

    pub fn list_issues(&self) -> Result<()> {
        self.run(&["issue", "list"])
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let command = CommandLine::new("gh").args(args.iter().copied());
        self.runner.run(&command, &self.workdir)
    }
}
