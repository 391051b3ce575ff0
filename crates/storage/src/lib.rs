//! SQLite-backed event storage for tcal.
//!
//! This crate owns everything that is persisted: the events a user adds from
//! the command line and the time-range queries that day and week views run
//! against them.
//!
//! # Core Concepts
//!
//! ## EventStore
//!
//! The [`EventStore`] wraps a single SQLite file. It is append-only: events can
//! be added and queried by overlapping time window, never edited or removed.
//! The file, its parent directory and the `events` table are created on first
//! use.
//!
//! ## Event
//!
//! An [`Event`] is a description, an optional category (empty string means
//! uncategorized) and a half-open `[start, end)` interval at minute precision.
//!
//! ## Timestamps
//!
//! Start and end are stored as `YYYY-MM-DDTHH:MM` text (see [`timestamp`]).
//! That encoding sorts the same way the instants do, which lets the overlap
//! query stay a plain string comparison in SQL.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use storage::{Event, EventStore};
//!
//! let store = EventStore::open("events.db");
//!
//! let day = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
//! let start = day.and_hms_opt(9, 0, 0).unwrap();
//! let end = day.and_hms_opt(10, 0, 0).unwrap();
//! store.add(&Event::new("Standup", "Work", start, end))?;
//!
//! let window_end = day.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
//! for event in store.query_overlap(day.and_hms_opt(0, 0, 0).unwrap(), window_end)? {
//!     println!("{} {}", event.start, event.description);
//! }
//! # Ok::<(), storage::Error>(())
//! ```

mod error;
mod event;
mod store;
pub mod timestamp;

pub use error::{Error, Result};
pub use event::Event;
pub use store::EventStore;
