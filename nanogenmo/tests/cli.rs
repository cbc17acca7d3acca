//! CLI tests for the `nanogenmo` binary.
//!
//! Spawns the binary against throwaway local git remotes (no network, no
//! `gh`) and checks exit codes, echoed commands and the resulting history.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use nanogenmo::exit_codes;
use nanogenmo::test_support::sample_readme;

/// Environment that keeps git away from the user's config and identity.
fn isolated(mut cmd: Command) -> Command {
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_AUTHOR_NAME", "NaNoGenMo Test")
        .env("GIT_AUTHOR_EMAIL", "test@nanogenmo.invalid")
        .env("GIT_COMMITTER_NAME", "NaNoGenMo Test")
        .env("GIT_COMMITTER_EMAIL", "test@nanogenmo.invalid")
        .env("RUST_LOG", "off");
    cmd
}

fn git(dir: &Path, args: &[&str]) -> String {
    let mut cmd = isolated(Command::new("git"));
    let output = cmd
        .args(args)
        .current_dir(dir)
        .output()
        .expect("spawn git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn nanogenmo(dir: &Path, args: &[&str]) -> Output {
    let mut cmd = isolated(Command::new(env!("CARGO_BIN_EXE_nanogenmo")));
    cmd.current_dir(dir)
        .args(["--config", "missing.toml"])
        .args(args)
        .output()
        .expect("run nanogenmo")
}

/// Bare repo at `<root>/<name>` whose history holds one README commit.
fn bare_remote(root: &Path, name: &str, readme: &str) -> std::path::PathBuf {
    let seed = root.join("seed");
    fs::create_dir_all(&seed).expect("seed dir");
    git(&seed, &["init", "--quiet"]);
    fs::write(seed.join("README.md"), readme).expect("write README");
    git(&seed, &["add", "README.md"]);
    git(&seed, &["commit", "--quiet", "-m", "seed"]);

    let remote = root.join(name);
    fs::create_dir_all(remote.parent().expect("parent")).expect("remote parent");
    git(
        root,
        &[
            "clone",
            "--quiet",
            "--bare",
            seed.to_str().expect("utf8"),
            remote.to_str().expect("utf8"),
        ],
    );
    fs::remove_dir_all(&seed).expect("remove seed");
    remote
}

#[test]
fn no_operation_exits_with_usage_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = nanogenmo(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::USAGE));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--create-repo"));
    assert!(stdout.contains("exits with status 2"));
}

#[test]
fn update_readme_rolls_title_and_pushes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let remote = bare_remote(temp.path(), "origin.git", &sample_readme(2023));
    let workspace = temp.path().join("ws");
    fs::create_dir_all(&workspace).expect("workspace");
    git(
        &workspace,
        &["clone", "--quiet", remote.to_str().expect("utf8"), "2024"],
    );

    let output = nanogenmo(
        temp.path(),
        &[
            "--update-readme",
            "--year",
            "2024",
            "--workspace",
            workspace.to_str().expect("utf8"),
        ],
    );

    assert_eq!(
        output.status.code(),
        Some(exit_codes::OK),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let readme = fs::read_to_string(workspace.join("2024").join("README.md")).expect("README");
    assert!(readme.contains("# NaNoGenMo 2024"));
    assert!(!readme.contains("# NaNoGenMo 2023"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("git commit -m '2023 -> 2024'"));
    assert_eq!(
        git(&remote, &["log", "-1", "--format=%s"]),
        "2023 -> 2024"
    );
}

#[test]
fn strict_update_fails_on_unexpected_readme() {
    let temp = tempfile::tempdir().expect("tempdir");
    let clone = temp.path().join("ws").join("2024");
    fs::create_dir_all(&clone).expect("clone dir");
    fs::write(clone.join("README.md"), "# Something else\n").expect("README");

    let output = nanogenmo(
        temp.path(),
        &[
            "--update-readme",
            "--strict",
            "--year",
            "2024",
            "--workspace",
            temp.path().join("ws").to_str().expect("utf8"),
        ],
    );

    assert_eq!(output.status.code(), Some(exit_codes::FAILURE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("# NaNoGenMo 2023"));
    assert_eq!(
        fs::read_to_string(clone.join("README.md")).expect("README"),
        "# Something else\n"
    );
}

#[test]
fn clone_repo_fetches_from_configured_host() {
    let temp = tempfile::tempdir().expect("tempdir");
    bare_remote(
        temp.path(),
        "remote/hugovk/2024",
        &sample_readme(2023),
    );
    let config = temp.path().join("nanogenmo.toml");
    fs::write(
        &config,
        format!("host = \"file://{}\"\n", temp.path().join("remote").display()),
    )
    .expect("config");
    let workspace = temp.path().join("ws");

    let mut cmd = isolated(Command::new(env!("CARGO_BIN_EXE_nanogenmo")));
    let output = cmd
        .current_dir(temp.path())
        .args([
            "--config",
            config.to_str().expect("utf8"),
            "--clone-repo",
            "--year",
            "2024",
            "--workspace",
            workspace.to_str().expect("utf8"),
        ])
        .output()
        .expect("run nanogenmo");

    assert_eq!(
        output.status.code(),
        Some(exit_codes::OK),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(workspace.join("2024").join("README.md").is_file());
}

#[test]
fn failing_git_exit_code_is_passed_through() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("nanogenmo.toml");
    fs::write(
        &config,
        format!("host = \"file://{}\"\n", temp.path().join("nowhere").display()),
    )
    .expect("config");

    let mut cmd = isolated(Command::new(env!("CARGO_BIN_EXE_nanogenmo")));
    let output = cmd
        .current_dir(temp.path())
        .args([
            "--config",
            config.to_str().expect("utf8"),
            "--clone-repo",
            "--create-labels",
            "--year",
            "2024",
            "--workspace",
            temp.path().join("ws").to_str().expect("utf8"),
        ])
        .output()
        .expect("run nanogenmo");

    // git exits 128 when the source repository doesn't exist.
    assert_eq!(output.status.code(), Some(128));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("gh label clone"));
}

#[test]
fn dry_run_echoes_every_command() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = nanogenmo(
        temp.path(),
        &[
            "--dry-run",
            "--create-repo",
            "--create-labels",
            "--create-issues",
            "--year",
            "2024",
            "--workspace",
            temp.path().join("ws").to_str().expect("utf8"),
        ],
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in [
        "Creating https://github.com/hugovk/2024...",
        "gh repo create 2024 --private",
        "git clone --bare https://github.com/NaNoGenMo/2023.git",
        "git push --mirror https://github.com/hugovk/2024.git",
        "Created: https://github.com/hugovk/2024",
        "gh label clone NaNoGenMo/2023",
        "gh label delete --yes 'good first issue'",
        "https://github.com/hugovk/2024/labels",
        "gh issue create --label admin --body-file",
        "--title Resources",
        "--title 'Press and other coverage'",
        "gh issue list",
        "Remaining manual steps:",
    ] {
        assert!(stdout.contains(expected), "missing {expected:?} in:\n{stdout}");
    }
    assert!(!temp.path().join("ws").exists());
}

#[test]
fn dry_run_previews_clone_and_readme_update_together() {
    let temp = tempfile::tempdir().expect("tempdir");
    let workspace = temp.path().join("ws");
    let output = nanogenmo(
        temp.path(),
        &[
            "--dry-run",
            "--clone-repo",
            "--update-readme",
            "--year",
            "2024",
            "--workspace",
            workspace.to_str().expect("utf8"),
        ],
    );

    assert_eq!(
        output.status.code(),
        Some(exit_codes::OK),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in [
        "git clone https://github.com/hugovk/2024",
        "not present, skipping substitutions",
        "git add README.md",
        "git commit -m '2023 -> 2024'",
        "git push",
    ] {
        assert!(stdout.contains(expected), "missing {expected:?} in:\n{stdout}");
    }
    assert!(!workspace.exists());
}
