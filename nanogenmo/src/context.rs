//! Per-invocation state shared by every operation.

use std::path::PathBuf;

use crate::core::issues::IssueLinks;
use crate::core::year::Years;
use crate::io::config::Config;
use crate::io::scratch::default_workspace;

/// Resolved years, config and paths for one run.
#[derive(Debug, Clone)]
pub struct Context {
    pub years: Years,
    pub config: Config,
    /// Directory that holds the working clone (`<workspace>/<current>`).
    pub workspace: PathBuf,
    pub dry_run: bool,
    pub strict_readme: bool,
}

/// CLI values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub year: Option<i32>,
    pub workspace: Option<PathBuf>,
    pub dry_run: bool,
    pub strict: bool,
}

impl Context {
    pub fn new(config: Config, overrides: Overrides) -> Self {
        let years = Years::resolve(overrides.year.or(config.year));
        let workspace = overrides
            .workspace
            .or_else(|| config.workspace.clone())
            .unwrap_or_else(default_workspace);
        let strict_readme = overrides.strict || config.strict_readme;
        Self {
            years,
            config,
            workspace,
            dry_run: overrides.dry_run,
            strict_readme,
        }
    }

    /// Working clone of this year's repository.
    pub fn clone_dir(&self) -> PathBuf {
        self.workspace.join(self.years.current.to_string())
    }

    /// Web URL of this year's repository.
    pub fn new_repo_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.host, self.config.owner, self.years.current
        )
    }

    pub fn new_repo_git_url(&self) -> String {
        format!("{}.git", self.new_repo_url())
    }

    /// Clone URL of last year's repository.
    pub fn previous_repo_git_url(&self) -> String {
        format!(
            "{}/{}/{}.git",
            self.config.host, self.config.org, self.years.previous
        )
    }

    /// `owner/repo` slug of last year's repository.
    pub fn previous_repo_slug(&self) -> String {
        format!("{}/{}", self.config.org, self.years.previous)
    }

    pub fn labels_url(&self) -> String {
        format!("{}/labels", self.new_repo_url())
    }

    pub fn issue_links(&self) -> IssueLinks<'_> {
        IssueLinks {
            host: &self.config.host,
            org: &self.config.org,
            floor_year: self.config.floor_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(year: i32) -> Context {
        Context::new(
            Config::default(),
            Overrides {
                year: Some(year),
                workspace: Some(PathBuf::from("/ws")),
                ..Overrides::default()
            },
        )
    }

    #[test]
    fn urls_follow_owner_and_org() {
        let ctx = context(2024);
        assert_eq!(ctx.new_repo_url(), "https://github.com/hugovk/2024");
        assert_eq!(ctx.new_repo_git_url(), "https://github.com/hugovk/2024.git");
        assert_eq!(
            ctx.previous_repo_git_url(),
            "https://github.com/NaNoGenMo/2023.git"
        );
        assert_eq!(ctx.previous_repo_slug(), "NaNoGenMo/2023");
        assert_eq!(ctx.labels_url(), "https://github.com/hugovk/2024/labels");
        assert_eq!(ctx.clone_dir(), PathBuf::from("/ws/2024"));
    }

    #[test]
    fn cli_overrides_win_over_config() {
        let config = Config {
            year: Some(2020),
            workspace: Some(PathBuf::from("/from-config")),
            strict_readme: false,
            ..Config::default()
        };
        let ctx = Context::new(
            config,
            Overrides {
                year: Some(2025),
                workspace: None,
                dry_run: true,
                strict: true,
            },
        );
        assert_eq!(ctx.years, Years::for_current(2025));
        assert_eq!(ctx.workspace, PathBuf::from("/from-config"));
        assert!(ctx.dry_run);
        assert!(ctx.strict_readme);
    }
}
