//! Scratch directories for transient clones.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::{Builder, TempDir};
use tracing::{debug, warn};

const SCRATCH_PREFIX: &str = "nanogenmo-create-";
const WORKSPACE_DIR: &str = "nanogenmo-update";

/// Create a uniquely named scratch directory under `root` (system temp if `None`).
pub fn create_scratch(root: Option<&Path>) -> Result<TempDir> {
    let dir = match root {
        Some(root) => {
            fs::create_dir_all(root)
                .with_context(|| format!("create scratch root {}", root.display()))?;
            Builder::new()
                .prefix(SCRATCH_PREFIX)
                .tempdir_in(root)
                .with_context(|| format!("create scratch dir in {}", root.display()))?
        }
        None => Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir()
            .context("create scratch dir")?,
    };
    debug!(path = %dir.path().display(), "created scratch dir");
    Ok(dir)
}

/// Recursively delete a scratch directory, logging rather than failing on errors.
pub fn remove_scratch(dir: TempDir) {
    let path = dir.path().to_path_buf();
    if let Err(err) = dir.close() {
        warn!(path = %path.display(), err = %err, "failed to remove scratch dir");
    }
}

/// Default parent directory for the working clone.
pub fn default_workspace() -> PathBuf {
    env::temp_dir().join(WORKSPACE_DIR)
}
