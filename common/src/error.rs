//! Error type for the display core.

use thiserror::Error;

/// Errors produced by time sampling and settings decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The wall clock has not been synchronized yet.
    #[error("wall clock time unavailable")]
    TimeUnavailable,

    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },

    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },

    #[error("unknown clock style code {0}")]
    UnknownClockStyle(u8),

    #[error("unknown date format code {0}")]
    UnknownDateFormat(u8),

    #[error("GMT offset {0} out of range")]
    GmtOffsetOutOfRange(i8),
}
