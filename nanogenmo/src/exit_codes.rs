//! Stable exit codes for the `nanogenmo` CLI.

use crate::io::process::CommandError;

/// Every selected operation succeeded.
pub const OK: i32 = 0;
/// An operation failed for a reason other than a child process exit.
pub const FAILURE: i32 = 1;
/// No operation was selected.
pub const USAGE: i32 = 2;

/// Exit code for `err`: a failed child's own code when there is one.
pub fn for_error(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CommandError>())
        .and_then(|failure| failure.code)
        .filter(|code| *code != OK)
        .unwrap_or(FAILURE)
}
