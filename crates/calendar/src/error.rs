//! Calendar error types.

use thiserror::Error;

/// Calendar errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A year, month, quarter or day falls outside the supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A period name did not match any known period.
    #[error("unknown period '{0}' (expected day, week, month, quarter or year)")]
    UnknownPeriod(String),
}

pub type Result<T> = std::result::Result<T, Error>;
