//! Git adapter for the bootstrap operations.
//!
//! Each method maps to exactly one `git` invocation, run through a
//! [`CommandRunner`] in an explicit working directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, instrument};

use super::process::{CommandLine, CommandRunner};

/// Wrapper for executing git commands in a working directory.
pub struct Git<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    workdir: PathBuf,
}

impl<'a, R: CommandRunner + ?Sized> Git<'a, R> {
    pub fn new(runner: &'a R, workdir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            workdir: workdir.into(),
        }
    }

    /// `git clone --bare <url>`: history only, no working tree.
    #[instrument(skip(self))]
    pub fn clone_bare(&self, url: &str) -> Result<()> {
        self.run(&["clone", "--bare", url])
    }

    /// `git push --mirror <url>`: make the destination's refs match ours exactly.
    #[instrument(skip(self))]
    pub fn push_mirror(&self, url: &str) -> Result<()> {
        self.run(&["push", "--mirror", url])
    }

    /// `git clone <url> <dest>`.
    #[instrument(skip(self, dest), fields(dest = %dest.display()))]
    pub fn clone_into(&self, url: &str, dest: &Path) -> Result<()> {
        let command = CommandLine::new("git")
            .args(["clone", url])
            .arg(dest.as_os_str());
        self.runner.run(&command, &self.workdir)
    }

    pub fn add(&self, path: &str) -> Result<()> {
        self.run(&["add", path])
    }

    #[instrument(skip(self))]
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message])
    }

    pub fn push(&self) -> Result<()> {
        self.run(&["push"])
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        debug!(workdir = %self.workdir.display(), "git {}", args.join(" "));
        let command = CommandLine::new("git").args(args.iter().copied());
        self.runner.run(&command, &self.workdir)
    }
}
