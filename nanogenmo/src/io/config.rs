//! Optional configuration stored in `nanogenmo.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::issues::DEFAULT_FLOOR_YEAR;
use crate::core::labels::ADMIN_LABEL;

/// Bootstrap configuration (TOML).
///
/// Every field is optional in the file. Missing fields default to the values
/// the event has always used.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Account the new repository is created under.
    pub owner: String,

    /// Account that hosts the previous editions.
    pub org: String,

    /// Web root for repository URLs.
    pub host: String,

    /// Oldest year linked per-year from the seeded issues.
    pub floor_year: i32,

    /// Label attached to the seeded issues.
    pub issue_label: String,

    /// Abort the README update when an expected pattern is missing.
    pub strict_readme: bool,

    /// Pin the current year instead of reading the clock.
    pub year: Option<i32>,

    /// Parent directory for create-repo scratch directories (system temp if unset).
    pub scratch_root: Option<PathBuf>,

    /// Directory holding the working clone.
    pub workspace: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: "hugovk".to_string(),
            org: "NaNoGenMo".to_string(),
            host: "https://github.com".to_string(),
            floor_year: DEFAULT_FLOOR_YEAR,
            issue_label: ADMIN_LABEL.to_string(),
            strict_readme: false,
            year: None,
            scratch_root: None,
            workspace: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("owner", &self.owner),
            ("org", &self.org),
            ("host", &self.host),
            ("issue_label", &self.issue_label),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
        }
        if self.host.ends_with('/') {
            return Err(anyhow!("host must not end with '/'"));
        }
        // Years before the default floor are covered by fixed legacy links.
        if self.floor_year < DEFAULT_FLOOR_YEAR {
            return Err(anyhow!("floor_year must be >= {DEFAULT_FLOOR_YEAR}"));
        }
        if let Some(year) = self.year
            && year <= self.floor_year
        {
            return Err(anyhow!(
                "year ({year}) must be after floor_year ({})",
                self.floor_year
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `Config::default()`.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = Config::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
