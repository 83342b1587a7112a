//! Public holiday records and a list-backed calendar.
//!
//! This module contains the [`PublicHoliday`] type shared by all calendars and
//! [`HolidayCalendar`], a calendar built from an explicit list of holidays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WorkingDayCalendar;

/// A single observed public holiday.
///
/// # Example
///
/// ```
/// use leave_sim::calendar::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date the holiday is observed on.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Freedom Day").
    pub name: String,
}

/// A calendar whose only non-working days are weekends and a fixed list of
/// public holidays.
///
/// # Example
///
/// ```
/// use leave_sim::calendar::{HolidayCalendar, PublicHoliday, WorkingDayCalendar};
/// use chrono::NaiveDate;
///
/// let cal = HolidayCalendar::new(
///     "New Year only",
///     vec![PublicHoliday {
///         date: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
///         name: "New Year's Day".to_string(),
///     }],
/// );
///
/// assert!(!cal.is_working_day(NaiveDate::from_ymd_opt(2014, 1, 1).unwrap()));
/// assert!(cal.is_working_day(NaiveDate::from_ymd_opt(2014, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    name: String,
    holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a name and a list of holidays.
    pub fn new(name: impl Into<String>, holidays: Vec<PublicHoliday>) -> Self {
        Self {
            name: name.into(),
            holidays,
        }
    }

    /// Returns the holidays this calendar knows about.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Checks if a given date is one of the listed public holidays.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }
}

impl WorkingDayCalendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }
}
