//! Bodies for the two standing discussion issues seeded every year.

use std::fmt::Write;

use crate::core::year::Years;

/// First year hosted under the event org; older editions live elsewhere.
pub const DEFAULT_FLOOR_YEAR: i32 = 2016;

pub const RESOURCES_TITLE: &str = "Resources";
pub const COVERAGE_TITLE: &str = "Press and other coverage";

const RESOURCES_INTRO: &str = "This is an open issue where you can comment and add resources that might come in handy for NaNoGenMo.

There are already a ton of resources on the old resources threads of previous editions:

";

const COVERAGE_INTRO: &str = "Links to previous years:\n\n";

/// Pre-org resources threads, newest first.
const LEGACY_RESOURCES: &[(i32, &str)] = &[
    (2015, "https://github.com/dariusk/NaNoGenMo-2015/issues/1"),
    (2014, "https://github.com/dariusk/nanogenmo-2014/issues/1"),
    (2013, "https://github.com/dariusk/NaNoGenMo/issues/11"),
];

/// Coverage threads that don't follow the `issues/2` convention, newest first.
const LEGACY_COVERAGE: &[(i32, &str)] = &[
    (2016, "https://github.com/NaNoGenMo/2016/issues/5"),
    (2015, "https://github.com/dariusk/NaNoGenMo-2015/issues/9"),
    (2014, "https://github.com/dariusk/NaNoGenMo-2014/issues/92"),
];

/// A title/body pair ready for `gh issue create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: &'static str,
    pub body: String,
}

/// Where past editions live and how far back the per-year links go.
#[derive(Debug, Clone, Copy)]
pub struct IssueLinks<'a> {
    pub host: &'a str,
    pub org: &'a str,
    pub floor_year: i32,
}

impl IssueLinks<'_> {
    fn yearly_lines(&self, years: Years, issue: u32, out: &mut String) {
        for year in (self.floor_year..=years.previous).rev() {
            let _ = writeln!(
                out,
                "* [{year}]({}/{}/{year}/issues/{issue})",
                self.host, self.org
            );
        }
    }
}

fn legacy_lines(links: &[(i32, &str)], out: &mut String) {
    for (year, url) in links {
        let _ = writeln!(out, "* [{year}]({url})");
    }
}

/// The "Resources" issue: every previous edition's issue #1.
pub fn resources_issue(years: Years, links: IssueLinks<'_>) -> IssueDraft {
    let mut body = String::from(RESOURCES_INTRO);
    links.yearly_lines(years, 1, &mut body);
    legacy_lines(LEGACY_RESOURCES, &mut body);
    IssueDraft {
        title: RESOURCES_TITLE,
        body,
    }
}

/// The "Press and other coverage" issue: every previous edition's issue #2.
pub fn coverage_issue(years: Years, links: IssueLinks<'_>) -> IssueDraft {
    let mut body = String::from(COVERAGE_INTRO);
    links.yearly_lines(years, 2, &mut body);
    legacy_lines(LEGACY_COVERAGE, &mut body);
    IssueDraft {
        title: COVERAGE_TITLE,
        body,
    }
}
