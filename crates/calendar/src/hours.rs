//! Per-category time totals for the week view.

use std::collections::BTreeMap;

use chrono::Duration;
use storage::Event;

/// Bucket name for events with an empty category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Sum event durations per category, keyed alphabetically.
pub fn category_totals(events: &[Event]) -> BTreeMap<String, Duration> {
    let mut totals: BTreeMap<String, Duration> = BTreeMap::new();
    for event in events {
        let key = if event.is_uncategorized() {
            UNCATEGORIZED
        } else {
            event.category.as_str()
        };
        let total = totals.entry(key.to_string()).or_insert_with(Duration::zero);
        *total = *total + event.duration();
    }
    totals
}

/// Fractional hours in a duration, down to the second.
pub fn to_hours(duration: Duration) -> f64 {
    duration.num_seconds() as f64 / 3600.0
}

/// `"1 hr"`, `"2 hrs"`, `"0 hrs"` or `"1.5 hrs"`.
pub fn format_hours(hours: f64) -> String {
    if hours == 1.0 {
        "1 hr".to_string()
    } else if hours.fract() == 0.0 {
        format!("{} hrs", hours as i64)
    } else {
        format!("{hours:.1} hrs")
    }
}
