//! Literal README substitutions that roll the event page forward one year.

use crate::core::year::Years;

/// Event name used in the README title.
pub const EVENT_NAME: &str = "NaNoGenMo";

/// One literal `old` → `new` substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl Replacement {
    fn new(old: String, new: String) -> Self {
        Self { old, new }
    }

    fn inserts_around_old(&self) -> bool {
        self.new.contains(&self.old)
    }
}

/// What happened to a single replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementStatus {
    /// Pattern found and replaced.
    Applied,
    /// Replacement text already present; left untouched.
    AlreadyApplied,
    /// Neither the pattern nor its replacement is present.
    Missing,
}

/// Outcome of [`apply_replacements`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeUpdate {
    pub text: String,
    pub outcomes: Vec<(Replacement, ReplacementStatus)>,
}

impl ReadmeUpdate {
    pub fn changed(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, status)| *status == ReplacementStatus::Applied)
    }

    pub fn missing(&self) -> Vec<&Replacement> {
        self.outcomes
            .iter()
            .filter(|(_, status)| *status == ReplacementStatus::Missing)
            .map(|(replacement, _)| replacement)
            .collect()
    }
}

/// The five ordered substitutions for rolling `years.previous` to `years.current`.
///
/// `host` is the web root (e.g. `https://github.com`) and `org` the account
/// hosting past editions.
pub fn replacements(years: Years, host: &str, org: &str) -> Vec<Replacement> {
    let current = years.current;
    let previous = years.previous;
    let older = years.before_previous();
    vec![
        Replacement::new(
            format!("# {EVENT_NAME} {previous}"),
            format!("# {EVENT_NAME} {current}"),
        ),
        Replacement::new(
            format!("{org}/{previous}/issues?q=label"),
            format!("{org}/{current}/issues?q=label"),
        ),
        Replacement::new(
            format!("This is the {previous} edition."),
            format!("This is the {current} edition."),
        ),
        Replacement::new(
            format!("* [{older}]({host}/{org}/{older})"),
            format!("* [{previous}]({host}/{org}/{previous})\n* [{older}]({host}/{org}/{older})"),
        ),
        Replacement::new(
            format!("* [{older}]({host}/{org}/{older}/issues/1)"),
            format!(
                "* [{older}]({host}/{org}/{older}/issues/1)\n* [{previous}]({host}/{org}/{previous}/issues/1)"
            ),
        ),
    ]
}

/// Apply `replacements` in order, replacing every occurrence of each pattern.
///
/// A list-insertion replacement (whose new text still contains its old text)
/// is skipped when its new text is already present, so a second pass doesn't
/// duplicate lines. Every other replacement runs whenever its pattern is found.
pub fn apply_replacements(readme: &str, replacements: Vec<Replacement>) -> ReadmeUpdate {
    let mut text = readme.to_string();
    let mut outcomes = Vec::with_capacity(replacements.len());
    for replacement in replacements {
        let status = if text.contains(&replacement.old) {
            if replacement.inserts_around_old() && text.contains(&replacement.new) {
                ReplacementStatus::AlreadyApplied
            } else {
                text = text.replace(&replacement.old, &replacement.new);
                ReplacementStatus::Applied
            }
        } else if text.contains(&replacement.new) {
            ReplacementStatus::AlreadyApplied
        } else {
            ReplacementStatus::Missing
        };
        outcomes.push((replacement, status));
    }
    ReadmeUpdate { text, outcomes }
}

/// Commit message recorded for the README roll-forward.
pub fn commit_message(years: Years) -> String {
    format!("{} -> {}", years.previous, years.current)
}
