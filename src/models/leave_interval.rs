//! Taken-leave interval model.
//!
//! This module contains the [`LeaveInterval`] type: one period of leave with
//! its chargeable working-day duration fixed at construction.

use std::cmp::Ordering;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::calendar::WorkingDayCalendar;
use crate::error::{LeaveError, LeaveResult};

/// A single period of taken leave.
///
/// The working duration is measured against a calendar once, when the
/// interval is built; the interval keeps no reference to the calendar.
///
/// Two intervals are equal when both their start and end dates match.
/// Intervals order by start date, then by end date; the working duration
/// takes no part in either.
///
/// # Example
///
/// ```
/// use leave_sim::calendar::SouthAfrica;
/// use leave_sim::models::LeaveInterval;
/// use chrono::NaiveDate;
///
/// let leave = LeaveInterval::new(
///     NaiveDate::from_ymd_opt(2014, 1, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 1, 10).unwrap(),
///     &SouthAfrica,
/// )?;
///
/// assert_eq!(leave.calendar_duration(), 9);
/// assert_eq!(leave.working_duration(), 7);
/// assert_eq!(leave.to_string(), "7 (2014-01-02 - 2014-01-10)");
/// # Ok::<(), leave_sim::error::LeaveError>(())
/// ```
#[derive(Debug, Clone, Eq, Serialize)]
pub struct LeaveInterval {
    start_date: NaiveDate,
    end_date: NaiveDate,
    working_duration: u32,
}

impl LeaveInterval {
    /// Creates an interval and counts its working days against `calendar`.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::InvalidInterval`] if `start_date > end_date`.
    pub fn new<C>(start_date: NaiveDate, end_date: NaiveDate, calendar: &C) -> LeaveResult<Self>
    where
        C: WorkingDayCalendar + ?Sized,
    {
        if start_date > end_date {
            return Err(LeaveError::InvalidInterval {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
            working_duration: calendar.working_days_between(start_date, end_date),
        })
    }

    /// The first day of leave.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The last day of leave (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The number of calendar days in the interval, both ends inclusive.
    pub fn calendar_duration(&self) -> u32 {
        (self.end_date - self.start_date).num_days() as u32 + 1
    }

    /// The number of working days in the interval. This is what gets charged
    /// against the balance.
    pub fn working_duration(&self) -> u32 {
        self.working_duration
    }

    /// Returns `true` when the interval starts within the monthly window
    /// opening at `reference`.
    ///
    /// The window is `reference <= start_date <= reference + 1 month`; the end
    /// date plays no part.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_sim::calendar::SouthAfrica;
    /// use leave_sim::models::LeaveInterval;
    /// use chrono::NaiveDate;
    ///
    /// let leave = LeaveInterval::new(
    ///     NaiveDate::from_ymd_opt(2013, 8, 8).unwrap(),
    ///     NaiveDate::from_ymd_opt(2013, 8, 8).unwrap(),
    ///     &SouthAfrica,
    /// )?;
    ///
    /// assert!(leave.is_due(NaiveDate::from_ymd_opt(2013, 8, 1).unwrap()));
    /// assert!(!leave.is_due(NaiveDate::from_ymd_opt(2013, 9, 1).unwrap()));
    /// assert!(!leave.is_due(NaiveDate::from_ymd_opt(2013, 7, 1).unwrap()));
    /// # Ok::<(), leave_sim::error::LeaveError>(())
    /// ```
    pub fn is_due(&self, reference: NaiveDate) -> bool {
        reference <= self.start_date
            && reference
                .checked_add_months(Months::new(1))
                .is_none_or(|window_end| self.start_date <= window_end)
    }
}

impl PartialEq for LeaveInterval {
    fn eq(&self, other: &Self) -> bool {
        self.start_date == other.start_date && self.end_date == other.end_date
    }
}

impl PartialOrd for LeaveInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LeaveInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_date
            .cmp(&other.start_date)
            .then_with(|| self.end_date.cmp(&other.end_date))
    }
}

impl std::fmt::Display for LeaveInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            self.working_duration, self.start_date, self.end_date
        )
    }
}
