//! Error types for the leave simulator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts a simulation before it starts. A shortfall
//! in the leave balance is not an error; see
//! [`ShortfallWarning`](crate::models::ShortfallWarning).

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the leave simulator.
///
/// All of these indicate a corrupt input dataset rather than a runtime
/// condition, so callers are expected to stop rather than recover.
///
/// # Example
///
/// ```
/// use leave_sim::error::LeaveError;
/// use chrono::NaiveDate;
///
/// let error = LeaveError::InvalidInterval {
///     start: NaiveDate::from_ymd_opt(2014, 1, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2014, 1, 2).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid leave interval: start 2014-01-10 is after end 2014-01-02"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveError {
    /// A leave interval started after it ended.
    #[error("Invalid leave interval: start {start} is after end {end}")]
    InvalidInterval {
        /// The interval's start date.
        start: NaiveDate,
        /// The interval's end date.
        end: NaiveDate,
    },

    /// Two leave intervals in the schedule overlap.
    #[error("Leave overlapping: {previous}, {next}")]
    OverlappingLeave {
        /// The earlier interval, rendered for display.
        previous: String,
        /// The later interval that starts on or before `previous` ends.
        next: String,
    },

    /// The leave dataset could not be parsed.
    #[error("Failed to parse leave dataset '{source_name}': {message}")]
    DatasetParseError {
        /// Where the dataset came from (file name or label).
        source_name: String,
        /// A description of the parse error.
        message: String,
    },

    /// Date arithmetic left the supported calendar range.
    #[error("Date out of range when stepping from {date}")]
    DateOutOfRange {
        /// The date that could not be advanced.
        date: NaiveDate,
    },

    /// January 1 of the requested year is not a representable date.
    #[error("Year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The year that has no representable January 1.
        year: i32,
    },
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;
