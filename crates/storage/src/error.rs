use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("year {year} is outside the storable range 0000-9999")]
    YearOutOfRange { year: i32 },

    #[error("malformed timestamp '{value}' in event store: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
