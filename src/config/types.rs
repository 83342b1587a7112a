//! Configuration types for the leave simulator.
//!
//! This module contains the strongly-typed structures the embedded leave
//! dataset is deserialized into, and the simulation window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LeaveError, LeaveResult};

/// One period of historical leave as written in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// First day of leave.
    pub start: NaiveDate,
    /// Last day of leave (inclusive).
    pub end: NaiveDate,
}

/// The historical leave dataset file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDataset {
    /// Free-text description of the dataset.
    #[serde(default)]
    pub description: String,
    /// Leave entries, in any order.
    pub leave: Vec<LeaveEntry>,
}

impl LeaveDataset {
    /// Returns the entries as `(start, end)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (NaiveDate, NaiveDate)> + '_ {
        self.leave.iter().map(|entry| (entry.start, entry.end))
    }
}

/// The inclusive range of dates the monthly cursor walks.
///
/// # Example
///
/// ```
/// use leave_sim::config::SimulationWindow;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let window = SimulationWindow::through_next_year(today)?;
///
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
/// # Ok::<(), leave_sim::error::LeaveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationWindow {
    /// First cursor date.
    pub start: NaiveDate,
    /// Last cursor date (inclusive).
    pub end: NaiveDate,
}

impl SimulationWindow {
    /// Year the simulation starts in; January 1 of this year is the first step.
    pub const START_YEAR: i32 = 2011;

    /// Creates a window from explicit dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The standard window: January 1, 2011 through January 1 of the year
    /// after `today`.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::YearOutOfRange`] if `today` is in the last year
    /// `chrono` can represent.
    pub fn through_next_year(today: NaiveDate) -> LeaveResult<Self> {
        let next_year = today
            .year()
            .checked_add(1)
            .ok_or(LeaveError::YearOutOfRange { year: today.year() })?;
        Ok(Self {
            start: january_first(Self::START_YEAR)?,
            end: january_first(next_year)?,
        })
    }
}

fn january_first(year: i32) -> LeaveResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(LeaveError::YearOutOfRange { year })
}
