//! Sequential execution of external commands.
//!
//! Commands are argument vectors handed straight to the OS; nothing is ever
//! interpreted by a shell. Every command gets an explicit working directory.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use thiserror::Error;
use tracing::{debug, error, instrument};

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program and arguments as (lossy) strings.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<Cow<'_, str>> = std::iter::once(Cow::Borrowed(self.program.as_str()))
            .chain(self.args.iter().map(|a| a.to_string_lossy()))
            .collect();
        f.write_str(&shell_words::join(words))
    }
}

/// A command that ran and exited unsuccessfully.
#[derive(Debug, Error)]
#[error("`{command}` failed with {}", exit_label(.code))]
pub struct CommandError {
    pub command: String,
    /// Exit code, or `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Executes one command to completion.
pub trait CommandRunner {
    fn run(&self, command: &CommandLine, workdir: &Path) -> Result<()>;
}

/// Runs commands on the host, echoing each to stdout first.
///
/// With `dry_run` set the command is echoed and nothing is spawned.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    dry_run: bool,
}

impl SystemRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(program = %command.program, workdir = %workdir.display()))]
    fn run(&self, command: &CommandLine, workdir: &Path) -> Result<()> {
        println!("{command}");
        if self.dry_run {
            debug!("dry run, not spawning");
            return Ok(());
        }

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(workdir)
            .status()
            .with_context(|| format!("spawn {}", command.program))?;

        debug!(exit_code = ?status.code(), "command finished");
        if !status.success() {
            error!(exit_code = ?status.code(), "command failed");
            return Err(CommandError {
                command: command.to_string(),
                code: status.code(),
            }
            .into());
        }
        Ok(())
    }
}

/// Run `commands` in order, stopping at the first failure.
pub fn run_all<R: CommandRunner + ?Sized>(
    runner: &R,
    commands: &[CommandLine],
    workdir: &Path,
) -> Result<()> {
    for command in commands {
        runner.run(command, workdir)?;
    }
    Ok(())
}

/// Parse a block of command lines.
///
/// This is the text-block entry point for callers that hold commands as a
/// script; the bootstrap operations build [`CommandLine`] values directly.
///
/// Blank lines and `#` comments are skipped; each remaining line is split
/// into words with POSIX shell quoting rules (no expansion, no pipes).
pub fn parse_script(script: &str) -> Result<Vec<CommandLine>> {
    let mut commands = Vec::new();
    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut words = shell_words::split(line)
            .with_context(|| format!("parse command on line {}: {line}", index + 1))?
            .into_iter();
        let program = words
            .next()
            .ok_or_else(|| anyhow!("empty command on line {}", index + 1))?;
        commands.push(CommandLine::new(program).args(words));
    }
    Ok(commands)
}

/// Parse `script` and run each command in order, stopping at the first failure.
///
/// Nothing runs if any line fails to parse.
pub fn run_script<R: CommandRunner + ?Sized>(
    runner: &R,
    script: &str,
    workdir: &Path,
) -> Result<()> {
    let commands = parse_script(script)?;
    run_all(runner, &commands, workdir)
}
