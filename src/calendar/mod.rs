//! Working-day calendars.
//!
//! A [`WorkingDayCalendar`] answers a single question: is a given date a
//! working day in some region? Leave durations are charged in working days,
//! so every [`LeaveInterval`](crate::models::LeaveInterval) is measured
//! against one of these.
//!
//! # Example
//!
//! ```
//! use leave_sim::calendar::{SouthAfrica, WorkingDayCalendar};
//! use chrono::NaiveDate;
//!
//! let cal = SouthAfrica;
//! // Youth Day
//! assert!(!cal.is_working_day(NaiveDate::from_ymd_opt(2014, 6, 16).unwrap()));
//! assert!(cal.is_working_day(NaiveDate::from_ymd_opt(2014, 6, 17).unwrap()));
//! ```

mod holiday;
mod south_africa;

use chrono::{Datelike, NaiveDate, Weekday};

pub use holiday::{HolidayCalendar, PublicHoliday};
pub use south_africa::SouthAfrica;

/// A regional calendar of weekends and public holidays.
pub trait WorkingDayCalendar {
    /// Human-readable name (e.g. `"South Africa"`).
    fn name(&self) -> &str;

    /// Returns `true` if `date` is neither a weekend day nor a public holiday.
    fn is_working_day(&self, date: NaiveDate) -> bool;

    /// Returns `true` if `date` falls on a weekend.
    ///
    /// Saturday and Sunday unless overridden.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Counts the working days in `start..=end`.
    ///
    /// Returns zero when `start > end`.
    fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let count = start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_working_day(*d))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}
