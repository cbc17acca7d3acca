//! I/O adapters for the bootstrap operations.

pub mod config;
pub mod gh;
pub mod git;
pub mod process;
pub mod scratch;
