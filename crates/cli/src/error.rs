//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// `--date` was not a `YYYY-MM-DD` date with a year in 0000-9999.
    #[error("invalid --date '{0}'; use YYYY-MM-DD")]
    InvalidDate(String),

    /// `--start` or `--end` was not a `YYYY-MM-DDTHH:MM` timestamp with a
    /// year in 0000-9999.
    #[error("invalid --{flag} '{value}'; use YYYY-MM-DDTHH:MM")]
    InvalidTimestamp { flag: &'static str, value: String },

    /// The description is empty or only whitespace.
    #[error("description must not be empty")]
    EmptyDescription,

    /// The event would end at or before it starts.
    #[error("end must be after start")]
    InvalidRange,

    /// Configuration is invalid or unreadable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An error occurred in the storage layer.
    #[error(transparent)]
    Storage(#[from] storage::Error),

    /// An error occurred while rendering a calendar view.
    #[error(transparent)]
    Calendar(#[from] calendar::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
