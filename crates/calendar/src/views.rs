//! Event-aware day and week views.
//!
//! Both renderers take events already narrowed to their window by the caller
//! (usually [`EventStore::query_overlap`](storage::EventStore::query_overlap))
//! and return the lines to print.

use chrono::{Datelike, Days, NaiveDate};
use storage::Event;

use crate::hours::{category_totals, format_hours, to_hours};
use crate::layout::{DAYS_PER_WEEK, WEEKDAY_HEADER, format_day_cell, week_range_label};
use crate::{Error, Result};

/// `"  09:00–10:30  [Work] Planning"`, without the bracket when uncategorized.
pub fn format_event_line(event: &Event) -> String {
    let range = format!("{}–{}", event.start.format("%H:%M"), event.end.format("%H:%M"));
    if event.is_uncategorized() {
        format!("  {range}  {}", event.description)
    } else {
        format!("  {range}  [{}] {}", event.category, event.description)
    }
}

fn by_start(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.start);
    sorted
}

/// Render a single day: a dated header, a dashed rule and one line per event.
pub fn render_day(date: NaiveDate, events: &[Event]) -> Vec<String> {
    let header = date.format("%A, %B %-d, %Y").to_string();
    let rule = "-".repeat(header.chars().count());

    let mut lines = vec![header, rule];
    lines.extend(by_start(events).into_iter().map(format_event_line));
    lines
}

/// Render the week beginning on `week_start` (a Sunday).
///
/// After the date grid come per-category hour totals and then the events of
/// each day that has any. An event is listed under the day it starts on.
pub fn render_week(week_start: NaiveDate, year: i32, events: &[Event]) -> Result<Vec<String>> {
    let days = (0..DAYS_PER_WEEK as u64)
        .map(|offset| {
            week_start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| Error::InvalidDate(format!("week of {week_start} is out of range")))
        })
        .collect::<Result<Vec<_>>>()?;
    let week_end = days[DAYS_PER_WEEK - 1];

    let mut lines = vec![
        week_range_label(week_start, week_end, year),
        WEEKDAY_HEADER.to_string(),
        days.iter()
            .map(|d| format_day_cell(Some(d.day()), false))
            .collect::<Vec<_>>()
            .join(" "),
    ];

    if !events.is_empty() {
        lines.push(String::new());
        for (category, total) in category_totals(events) {
            lines.push(format!("  {category}: {}", format_hours(to_hours(total))));
        }
        lines.push(String::new());
    }

    let sorted = by_start(events);
    for day in days {
        let on_day: Vec<&Event> = sorted
            .iter()
            .copied()
            .filter(|e| e.start.date() == day)
            .collect();
        if on_day.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(day.format("%a %-m/%-d").to_string());
        lines.extend(on_day.into_iter().map(format_event_line));
    }

    Ok(lines)
}
