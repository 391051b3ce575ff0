//! Calendar periods and the time windows they cover.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::layout::{DAYS_PER_WEEK, MONTHS_PER_QUARTER};
use crate::{Error, Result};

/// The granularities a view can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Quarter,
        Period::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPeriod(s.to_string()))
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> Result<NaiveDate> {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back))
        .ok_or_else(|| Error::InvalidDate(format!("no week start for {date}")))
}

/// `[date 00:00, next day 00:00)`.
pub fn day_window(date: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime)> {
    window(date, 1)
}

/// `[sunday 00:00, sunday + 7 days 00:00)`.
pub fn week_window(sunday: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime)> {
    window(sunday, DAYS_PER_WEEK as u64)
}

fn window(start: NaiveDate, days: u64) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let end = start
        .checked_add_days(Days::new(days))
        .ok_or_else(|| Error::InvalidDate(format!("{days} days after {start} is out of range")))?;
    Ok((start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)))
}

/// Quarter (1-4) containing `month` (1-12).
pub fn quarter_of_month(month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidDate(format!("month {month} is not in 1-12")));
    }
    Ok((month - 1) / MONTHS_PER_QUARTER + 1)
}
