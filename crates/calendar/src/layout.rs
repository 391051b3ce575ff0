//! Display constants and the event-free renderers: month grid, quarter and
//! year summaries, plus the cell and header helpers the day and week views
//! share.

use chrono::{Datelike, NaiveDate};

use crate::{Error, Result};

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_QUARTER: u32 = 3;

pub const MONTH_HEADER_WIDTH: usize = 20;
pub const YEAR_HEADER_WIDTH: usize = 24;
pub const DAY_CELL_WIDTH: usize = 2;
pub const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Reverse video, used to mark today in the month grid.
pub const ANSI_REVERSE_START: &str = "\x1b[7m";
pub const ANSI_REVERSE_END: &str = "\x1b[0m";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name for `month` in 1-12.
pub fn month_name(month: u32) -> Result<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .ok_or_else(|| Error::InvalidDate(format!("month {month} is not in 1-12")))
}

/// Three-letter month abbreviation, e.g. `Sep`.
pub fn month_abbr(month: u32) -> Result<&'static str> {
    month_name(month).map(|name| &name[..3])
}

/// One grid cell: the day number right-aligned, blank for padding slots.
pub fn format_day_cell(day: Option<u32>, highlight: bool) -> String {
    match day {
        None => " ".repeat(DAY_CELL_WIDTH),
        Some(d) if highlight => format!(
            "{ANSI_REVERSE_START}{d:>width$}{ANSI_REVERSE_END}",
            width = DAY_CELL_WIDTH
        ),
        Some(d) => format!("{d:>width$}", width = DAY_CELL_WIDTH),
    }
}

fn format_week_row(week: &[Option<u32>], highlight: Option<u32>) -> String {
    week.iter()
        .map(|&day| format_day_cell(day, day.is_some() && day == highlight))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"Week of Jan 28 – Feb 3, 2024"`.
pub fn week_range_label(start: NaiveDate, end: NaiveDate, year: i32) -> String {
    format!(
        "Week of {} {} – {} {}, {year}",
        start.format("%b"),
        start.day(),
        end.format("%b"),
        end.day()
    )
}

fn days_in_month(first: NaiveDate) -> Result<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let next = next.ok_or_else(|| Error::InvalidDate(format!("{first} is out of range")))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Render one month as a Sunday-first grid. `today` is highlighted when it
/// falls inside the month.
pub fn render_month(year: i32, month: u32, today: NaiveDate) -> Result<Vec<String>> {
    let name = month_name(month)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::InvalidDate(format!("{year}-{month:02} is out of range")))?;
    let highlight =
        (today.year() == year && today.month() == month).then(|| today.day());

    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<u32>> = vec![None; lead];
    cells.extend((1..=days_in_month(first)?).map(Some));
    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(None);
    }

    let mut lines = vec![
        format!("{:^width$}", format!("{name} {year}"), width = MONTH_HEADER_WIDTH),
        WEEKDAY_HEADER.to_string(),
    ];
    lines.extend(
        cells
            .chunks(DAYS_PER_WEEK)
            .map(|week| format_week_row(week, highlight)),
    );
    Ok(lines)
}

/// `"Q3 2024: July, August, September"`.
pub fn render_quarter(year: i32, quarter: u32) -> Result<Vec<String>> {
    if !(1..=4).contains(&quarter) {
        return Err(Error::InvalidDate(format!("quarter {quarter} is not in 1-4")));
    }
    let first = (quarter - 1) * MONTHS_PER_QUARTER + 1;
    let names = (first..first + MONTHS_PER_QUARTER)
        .map(month_name)
        .collect::<Result<Vec<_>>>()?;
    Ok(vec![format!("Q{quarter} {year}: {}", names.join(", "))])
}

/// Centered year, a blank line, then the twelve month abbreviations.
pub fn render_year(year: i32) -> Vec<String> {
    let abbrs: Vec<&str> = MONTH_NAMES.iter().map(|name| &name[..3]).collect();
    vec![
        format!("{:^width$}", year, width = YEAR_HEADER_WIDTH),
        String::new(),
        abbrs.join(" "),
    ]
}
