//! Labels GitHub adds to every new repository that the event doesn't use.

pub const DEFAULT_LABELS: &[&str] = &[
    "bug",
    "documentation",
    "duplicate",
    "enhancement",
    "good first issue",
    "help wanted",
    "invalid",
    "question",
    "wontfix",
];

/// Label applied to the seeded discussion issues.
pub const ADMIN_LABEL: &str = "admin";
