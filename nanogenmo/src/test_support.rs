//! Test-only fakes and fixtures.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::context::{Context, Overrides};
use crate::io::config::Config;
use crate::io::process::{CommandError, CommandLine, CommandRunner};

/// A command as seen by [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub argv: Vec<String>,
    pub workdir: PathBuf,
}

/// Records commands instead of running them, optionally failing one.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    calls: RefCell<Vec<RecordedCall>>,
    fail_at: Option<(usize, i32)>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `index`th (0-based) command with exit `code`.
    pub fn failing_at(index: usize, code: i32) -> Self {
        Self {
            fail_at: Some((index, code)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn argvs(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|c| c.argv.clone()).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &CommandLine, workdir: &Path) -> Result<()> {
        let index = {
            let mut calls = self.calls.borrow_mut();
            calls.push(RecordedCall {
                argv: command.argv(),
                workdir: workdir.to_path_buf(),
            });
            calls.len() - 1
        };
        match self.fail_at {
            Some((fail_index, code)) if fail_index == index => Err(CommandError {
                command: command.to_string(),
                code: Some(code),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

/// Context pinned to `year` with the clone workspace at `workspace`.
pub fn test_context(workspace: &Path, year: i32) -> Context {
    Context::new(
        Config::default(),
        Overrides {
            year: Some(year),
            workspace: Some(workspace.to_path_buf()),
            ..Overrides::default()
        },
    )
}

/// Write `contents` to the README of the context's clone directory.
pub fn write_clone_readme(ctx: &Context, contents: &str) -> Result<PathBuf> {
    let dir = ctx.clone_dir();
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join("README.md");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// A README in the shape of the `previous` edition's.
pub fn sample_readme(previous: i32) -> String {
    let older = previous - 1;
    let oldest = previous - 2;
    format!(
        "# NaNoGenMo {previous}

National Novel Generation Month. See the
[admin issues](https://github.com/NaNoGenMo/{previous}/issues?q=label%3Aadmin).

This is the {previous} edition.

## Previous editions

* [{older}](https://github.com/NaNoGenMo/{older})
* [{oldest}](https://github.com/NaNoGenMo/{oldest})

## Resources

* [{oldest}](https://github.com/NaNoGenMo/{oldest}/issues/1)
* [{older}](https://github.com/NaNoGenMo/{older}/issues/1)
"
    )
}
