//! Current/previous year resolution.
//!
//! Every operation in one invocation must agree on which year is being
//! bootstrapped, so the clock is read at most once per process.

use std::sync::OnceLock;

use chrono::{Datelike, Local};

static CLOCK_YEARS: OnceLock<Years> = OnceLock::new();

/// The year being bootstrapped and the one it is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Years {
    pub current: i32,
    pub previous: i32,
}

impl Years {
    /// Build the pair for an explicit current year.
    pub fn for_current(current: i32) -> Self {
        Self {
            current,
            previous: current - 1,
        }
    }

    /// Resolve from the local clock, memoized for the life of the process.
    pub fn from_clock() -> Self {
        *CLOCK_YEARS.get_or_init(|| Self::for_current(Local::now().year()))
    }

    /// Use `pinned` when given, otherwise the memoized clock reading.
    pub fn resolve(pinned: Option<i32>) -> Self {
        match pinned {
            Some(year) => Self::for_current(year),
            None => Self::from_clock(),
        }
    }

    /// The year before `previous`; README list entries are anchored on it.
    pub fn before_previous(&self) -> i32 {
        self.previous - 1
    }
}
