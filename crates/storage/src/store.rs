//! SQLite event store implementation.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tracing::debug;

use crate::{Event, Result, timestamp};

/// SQLite-backed event store.
///
/// The store only remembers where its database lives. Every call opens a
/// fresh connection, makes sure the schema exists and closes the connection
/// again when it returns.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Point a store at the given database path. Nothing is created until the
    /// first `add` or `query_overlap`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&self.path)?;
        init_schema(&conn)?;
        debug!(path = %self.path.display(), "opened event store");
        Ok(conn)
    }

    /// Append an event to the store.
    ///
    /// Fails with [`Error::YearOutOfRange`](crate::Error::YearOutOfRange)
    /// before touching the database if either end lies outside 0000-9999.
    pub fn add(&self, event: &Event) -> Result<()> {
        let start = timestamp::encode(&event.start)?;
        let end = timestamp::encode(&event.end)?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO events (description, category, start, end) VALUES (?1, ?2, ?3, ?4)",
            params![event.description, event.category, start, end],
        )?;
        debug!(id = conn.last_insert_rowid(), "inserted event");
        Ok(())
    }

    /// Load every event overlapping the half-open window `[window_start, window_end)`,
    /// ordered by start time. Events sharing a start time keep insertion order.
    pub fn query_overlap(
        &self,
        window_start: chrono::NaiveDateTime,
        window_end: chrono::NaiveDateTime,
    ) -> Result<Vec<Event>> {
        let window_start = timestamp::encode(&window_start)?;
        let window_end = timestamp::encode(&window_end)?;
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT description, category, start, end FROM events
             WHERE start < ?1 AND end > ?2 ORDER BY start, id",
        )?;

        let rows = stmt
            .query_map(params![window_end, window_start], |row| {
                let description: String = row.get(0)?;
                let category: String = row.get(1)?;
                let start: String = row.get(2)?;
                let end: String = row.get(3)?;
                Ok((description, category, start, end))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let events = rows
            .into_iter()
            .map(|(description, category, start, end)| {
                Ok(Event {
                    description,
                    category,
                    start: timestamp::decode(&start)?,
                    end: timestamp::decode(&end)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = events.len(), "queried overlapping events");
        Ok(events)
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            start TEXT NOT NULL,
            end TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_events_range
            ON events(start, end);
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn temp_store() -> (TempDir, EventStore) {
        let dir = TempDir::new().unwrap();
        let store = EventStore::open(dir.path().join("events.db"));
        (dir, store)
    }

    #[test]
    fn test_open_is_lazy() {
        let (_dir, store) = temp_store();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("events.db");
        let store = EventStore::open(&path);

        store
            .add(&Event::new("Standup", "Work", at(4, 9, 0), at(4, 9, 15)))
            .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_query_empty_store() {
        let (_dir, store) = temp_store();
        let events = store.query_overlap(at(1, 0, 0), at(8, 0, 0)).unwrap();
        assert!(events.is_empty());
        // Querying alone still creates the table.
        assert!(store.path().exists());
    }

    #[test]
    fn test_round_trip() {
        let (_dir, store) = temp_store();
        let event = Event::new("Lunch with Sam", "Personal", at(4, 12, 0), at(4, 13, 30));
        store.add(&event).unwrap();

        let events = store.query_overlap(at(4, 0, 0), at(5, 0, 0)).unwrap();
        assert_eq!(events, vec![event]);
    }

    #[test]
    fn test_round_trip_drops_seconds() {
        let (_dir, store) = temp_store();
        let start = NaiveDate::from_ymd_opt(2024, 7, 4)
            .unwrap()
            .and_hms_opt(9, 0, 42)
            .unwrap();
        store
            .add(&Event::new("Call", "", start, at(4, 10, 0)))
            .unwrap();

        let events = store.query_overlap(at(4, 0, 0), at(5, 0, 0)).unwrap();
        assert_eq!(events[0].start, at(4, 9, 0));
    }

    #[test]
    fn test_overlap_boundaries() {
        let (_dir, store) = temp_store();
        // Window is [10:00, 12:00).
        store
            .add(&Event::new("ends at window start", "", at(4, 9, 0), at(4, 10, 0)))
            .unwrap();
        store
            .add(&Event::new("starts at window end", "", at(4, 12, 0), at(4, 13, 0)))
            .unwrap();
        store
            .add(&Event::new("straddles start", "", at(4, 9, 30), at(4, 10, 1)))
            .unwrap();
        store
            .add(&Event::new("straddles end", "", at(4, 11, 59), at(4, 12, 30)))
            .unwrap();
        store
            .add(&Event::new("covers window", "", at(4, 8, 0), at(4, 14, 0)))
            .unwrap();
        store
            .add(&Event::new("inside window", "", at(4, 10, 30), at(4, 11, 0)))
            .unwrap();

        let events = store.query_overlap(at(4, 10, 0), at(4, 12, 0)).unwrap();
        let names: Vec<_> = events.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(
            names,
            vec!["covers window", "straddles start", "inside window", "straddles end"]
        );
        assert!(events.iter().all(|e| e.overlaps(at(4, 10, 0), at(4, 12, 0))));
    }

    #[test]
    fn test_results_sorted_by_start() {
        let (_dir, store) = temp_store();
        store
            .add(&Event::new("afternoon", "", at(5, 14, 0), at(5, 15, 0)))
            .unwrap();
        store
            .add(&Event::new("morning", "", at(5, 8, 0), at(5, 9, 0)))
            .unwrap();
        store
            .add(&Event::new("previous day", "", at(4, 20, 0), at(4, 21, 0)))
            .unwrap();

        let events = store.query_overlap(at(1, 0, 0), at(8, 0, 0)).unwrap();
        let names: Vec<_> = events.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["previous day", "morning", "afternoon"]);
    }

    #[test]
    fn test_equal_starts_keep_insertion_order() {
        let (_dir, store) = temp_store();
        for name in ["first", "second", "third"] {
            store
                .add(&Event::new(name, "", at(4, 9, 0), at(4, 10, 0)))
                .unwrap();
        }

        let events = store.query_overlap(at(4, 0, 0), at(5, 0, 0)).unwrap();
        let names: Vec<_> = events.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let (_dir, store) = temp_store();
        let event = Event::new("Gym", "Health", at(4, 7, 0), at(4, 8, 0));
        store.add(&event).unwrap();
        store.add(&event).unwrap();

        let events = store.query_overlap(at(4, 0, 0), at(5, 0, 0)).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_persists_across_store_instances() {
        let (dir, store) = temp_store();
        store
            .add(&Event::new("Dentist", "", at(4, 15, 0), at(4, 16, 0)))
            .unwrap();

        let reopened = EventStore::open(dir.path().join("events.db"));
        let events = reopened.query_overlap(at(4, 0, 0), at(5, 0, 0)).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].description, "Dentist");
    }

    #[test]
    fn test_rejects_years_that_break_text_order() {
        let (_dir, store) = temp_store();
        let year_10000 = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        let year_minus_1 = NaiveDate::from_ymd_opt(-1, 1, 1).unwrap();

        let far_future = Event::new(
            "far future",
            "",
            year_10000.and_hms_opt(0, 0, 0).unwrap(),
            year_10000.and_hms_opt(1, 0, 0).unwrap(),
        );
        assert!(matches!(
            store.add(&far_future),
            Err(Error::YearOutOfRange { year: 10000 })
        ));
        let before_zero = Event::new(
            "before year zero",
            "",
            year_minus_1.and_hms_opt(0, 0, 0).unwrap(),
            year_minus_1.and_hms_opt(23, 0, 0).unwrap(),
        );
        assert!(matches!(
            store.add(&before_zero),
            Err(Error::YearOutOfRange { year: -1 })
        ));
        // Rejected before the database file was created.
        assert!(!store.path().exists());

        let last_day = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        store
            .add(&Event::new(
                "last day",
                "",
                last_day.and_hms_opt(22, 0, 0).unwrap(),
                last_day.and_hms_opt(23, 0, 0).unwrap(),
            ))
            .unwrap();

        let err = store
            .query_overlap(
                last_day.and_hms_opt(0, 0, 0).unwrap(),
                year_10000.and_hms_opt(0, 0, 0).unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::YearOutOfRange { year: 10000 }));

        let events = store
            .query_overlap(
                last_day.and_hms_opt(0, 0, 0).unwrap(),
                last_day.and_hms_opt(23, 59, 0).unwrap(),
            )
            .unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let (_dir, store) = temp_store();
        store
            .add(&Event::new("ok", "", at(4, 9, 0), at(4, 10, 0)))
            .unwrap();
        {
            let conn = Connection::open(store.path()).unwrap();
            conn.execute(
                "INSERT INTO events (description, category, start, end) VALUES ('bad', '', '2024-07-04T09', '2024-07-04T11:00')",
                [],
            )
            .unwrap();
        }

        let err = store.query_overlap(at(4, 0, 0), at(5, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::Timestamp { ref value, .. } if value == "2024-07-04T09"));
    }
}
