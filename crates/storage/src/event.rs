//! Event record stored in the calendar.

use chrono::{Duration, NaiveDateTime};

/// A scheduled item covering the half-open interval `[start, end)`.
///
/// Callers are expected to construct events with `end > start`; the store
/// persists whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub description: String,
    /// Free-text label. Empty means uncategorized.
    pub category: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            start,
            end,
        }
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category.is_empty()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether this event overlaps the half-open window `[start, end)`.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && self.end > start
    }
}
