//! Period value types: an inclusive time range tagged with a granularity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Granularity of a reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    Month,
}

/// An inclusive time range in local civil time.
///
/// `start` and `end` are both inclusive; period ends carry millisecond
/// precision (`23:59:59.999`) so that any time-of-day on the last calendar
/// day still falls inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub kind: PeriodKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn new(kind: PeriodKind, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(end >= start);
        Self { kind, start, end }
    }

    /// True if `at` falls within the period, both bounds inclusive.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }

    /// Human-readable label for the period.
    ///
    /// English only; locale-aware rendering is the caller's concern, this is
    /// the raw default (`2025-03-12`, `Mar 9 – Mar 15`, `March 2025`).
    pub fn label(&self) -> String {
        match self.kind {
            PeriodKind::Day => self.start.format("%Y-%m-%d").to_string(),
            PeriodKind::Week => format!(
                "{} – {}",
                self.start.format("%b %-d"),
                self.end.format("%b %-d")
            ),
            PeriodKind::Month => self.start.format("%B %Y").to_string(),
        }
    }
}
