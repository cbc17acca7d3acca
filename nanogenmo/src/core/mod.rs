//! Deterministic, pure logic shared by the bootstrap operations.
//!
//! Core modules must be free of I/O side effects. They operate on plain
//! strings and years and return deterministic outputs suitable for tests.

pub mod issues;
pub mod labels;
pub mod readme;
pub mod year;
