//! Yearly bootstrap of the NaNoGenMo event repository.
//!
//! Creates this year's repository from last year's, rolls the README forward,
//! copies labels and seeds the standing discussion issues. The crate keeps a
//! strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (years, README substitutions,
//!   issue bodies). No I/O.
//! - **[`io`]**: Side-effecting adapters (process execution, `git`, `gh`,
//!   config, scratch directories).
//!
//! Orchestration modules ([`create_repo`], [`clone_repo`], [`update_readme`],
//! [`seed_labels`], [`seed_issues`]) combine the two, one per CLI flag.

pub mod clone_repo;
pub mod context;
pub mod core;
pub mod create_repo;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod plan;
pub mod seed_issues;
pub mod seed_labels;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod update_readme;
