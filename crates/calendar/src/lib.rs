//! Calendar views for tcal.
//!
//! Turns dates and stored events into the text tcal prints. Nothing here
//! touches the database; callers query [`storage::EventStore`] for the window
//! a view needs and hand the events in.
//!
//! - [`period`]: the five [`Period`]s and the windows (day, week) they query.
//! - [`layout`]: constants and the event-free month, quarter and year renderers.
//! - [`views`]: day and week views, which list events.
//! - [`hours`]: per-category hour totals shown in the week view.
//! - [`clock`]: the [`Clock`] capability that supplies "today".
//!
//! # Example
//!
//! ```
//! use calendar::{render_day, week_start};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
//! assert_eq!(render_day(date, &[])[0], "Thursday, July 4, 2024");
//! assert_eq!(week_start(date)?, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
//! # Ok::<(), calendar::Error>(())
//! ```

pub mod clock;
mod error;
pub mod hours;
pub mod layout;
pub mod period;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use layout::{render_month, render_quarter, render_year};
pub use period::{Period, day_window, quarter_of_month, week_start, week_window};
pub use views::{format_event_line, render_day, render_week};
