//! South Africa calendar.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::{PublicHoliday, WorkingDayCalendar};

/// Fixed-date holidays under the Public Holidays Act (1994).
const FIXED_HOLIDAYS: [(u32, u32, &str); 10] = [
    (1, 1, "New Year's Day"),
    (3, 21, "Human Rights Day"),
    (4, 27, "Freedom Day"),
    (5, 1, "Workers' Day"),
    (6, 16, "Youth Day"),
    (8, 9, "National Women's Day"),
    (9, 24, "Heritage Day"),
    (12, 16, "Day of Reconciliation"),
    (12, 25, "Christmas Day"),
    (12, 26, "Day of Goodwill"),
];

/// One-off holidays declared by proclamation, mostly election days.
const GAZETTED_HOLIDAYS: [(i32, u32, u32, &str); 6] = [
    (2011, 5, 18, "Local Government Elections"),
    (2014, 5, 7, "General Elections"),
    (2016, 8, 3, "Local Government Elections"),
    (2019, 5, 8, "General Elections"),
    (2021, 11, 1, "Local Government Elections"),
    (2024, 5, 29, "General Elections"),
];

/// South Africa calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Human Rights Day (Mar 21)
/// * Good Friday
/// * Family Day (Easter Monday)
/// * Freedom Day (Apr 27)
/// * Workers' Day (May 1)
/// * Youth Day (Jun 16)
/// * National Women's Day (Aug 9)
/// * Heritage Day (Sep 24)
/// * Day of Reconciliation (Dec 16)
/// * Christmas Day (Dec 25)
/// * Day of Goodwill (Dec 26)
/// * Gazetted election days
///
/// A fixed holiday falling on a Sunday is observed on the next day that is
/// neither a weekend nor already a holiday.
///
/// # Example
///
/// ```
/// use leave_sim::calendar::{SouthAfrica, WorkingDayCalendar};
/// use chrono::NaiveDate;
///
/// // Freedom Day 2014 fell on a Sunday, so Monday the 28th was observed.
/// let monday = NaiveDate::from_ymd_opt(2014, 4, 28).unwrap();
/// assert!(!SouthAfrica.is_working_day(monday));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SouthAfrica;

impl SouthAfrica {
    /// Returns every holiday observed in `year`, ordered by date.
    ///
    /// Sunday substitutes carry the original name with an `(observed)`
    /// suffix.
    pub fn holidays(&self, year: i32) -> Vec<PublicHoliday> {
        observed_holidays(year)
            .into_iter()
            .map(|(date, name, substitute)| PublicHoliday {
                date,
                name: if substitute {
                    format!("{name} (observed)")
                } else {
                    name.to_string()
                },
            })
            .collect()
    }

    /// Checks if `date` is an observed public holiday.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        observed_holidays(date.year())
            .iter()
            .any(|&(holiday, ..)| holiday == date)
    }
}

impl WorkingDayCalendar for SouthAfrica {
    fn name(&self) -> &str {
        "South Africa"
    }

    fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }

    /// Resolves each year's holidays once rather than once per day.
    fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let mut year_holidays: Option<(i32, Vec<NaiveDate>)> = None;
        let count = start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| {
                if self.is_weekend(*d) {
                    return false;
                }
                if year_holidays
                    .as_ref()
                    .is_none_or(|(year, _)| *year != d.year())
                {
                    let dates = observed_holidays(d.year())
                        .into_iter()
                        .map(|(date, ..)| date)
                        .collect();
                    year_holidays = Some((d.year(), dates));
                }
                year_holidays
                    .as_ref()
                    .is_some_and(|(_, dates)| !dates.contains(d))
            })
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

/// Observed holidays of `year` as `(date, name, is_sunday_substitute)`,
/// ordered by date.
fn observed_holidays(year: i32) -> Vec<(NaiveDate, &'static str, bool)> {
    let mut holidays: Vec<(NaiveDate, &'static str, bool)> = FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(m, d, name)| Some((NaiveDate::from_ymd_opt(year, m, d)?, name, false)))
        .collect();

    if let Some(easter) = easter_sunday(year) {
        holidays.push((easter - Duration::days(2), "Good Friday", false));
        holidays.push((easter + Duration::days(1), "Family Day", false));
    }

    holidays.extend(
        GAZETTED_HOLIDAYS
            .iter()
            .filter(|&&(y, ..)| y == year)
            .filter_map(|&(y, m, d, name)| Some((NaiveDate::from_ymd_opt(y, m, d)?, name, false))),
    );

    holidays.sort_by_key(|&(date, ..)| date);

    // Substitutes are resolved in date order so that Christmas on a
    // Sunday pushes Goodwill's observance to Tuesday.
    let sundays: Vec<(NaiveDate, &'static str)> = holidays
        .iter()
        .filter(|(date, ..)| date.weekday() == Weekday::Sun)
        .map(|&(date, name, _)| (date, name))
        .collect();
    for (sunday, name) in sundays {
        let mut observed = sunday + Duration::days(1);
        while matches!(observed.weekday(), Weekday::Sat | Weekday::Sun)
            || holidays.iter().any(|&(date, ..)| date == observed)
        {
            observed += Duration::days(1);
        }
        holidays.push((observed, name, true));
    }

    holidays.sort_by_key(|&(date, ..)| date);
    holidays
}

/// Gregorian Easter Sunday (anonymous computus).
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2011), Some(date(2011, 4, 24)));
        assert_eq!(easter_sunday(2012), Some(date(2012, 4, 8)));
        assert_eq!(easter_sunday(2013), Some(date(2013, 3, 31)));
        assert_eq!(easter_sunday(2014), Some(date(2014, 4, 20)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
    }

    /// SA-001: Good Friday and Family Day
    #[test]
    fn test_good_friday_and_family_day_2012() {
        let cal = SouthAfrica;
        assert!(!cal.is_working_day(date(2012, 4, 6)));
        assert!(!cal.is_working_day(date(2012, 4, 9)));
        assert!(cal.is_working_day(date(2012, 4, 10)));
    }

    /// SA-002: Sunday holiday observed on Monday
    #[test]
    fn test_freedom_day_sunday_substitute_2014() {
        let cal = SouthAfrica;
        assert_eq!(date(2014, 4, 27).weekday(), Weekday::Sun);
        assert!(!cal.is_working_day(date(2014, 4, 28)));
        assert!(cal.is_working_day(date(2014, 4, 29)));
    }

    /// SA-003: Christmas on a Sunday pushes Goodwill's substitute to Tuesday
    #[test]
    fn test_christmas_sunday_2011() {
        let cal = SouthAfrica;
        assert_eq!(date(2011, 12, 25).weekday(), Weekday::Sun);
        assert!(!cal.is_working_day(date(2011, 12, 26)));
        assert!(!cal.is_working_day(date(2011, 12, 27)));
        assert!(cal.is_working_day(date(2011, 12, 28)));
    }

    /// SA-004: gazetted election day
    #[test]
    fn test_election_day_2014() {
        let cal = SouthAfrica;
        assert!(!cal.is_working_day(date(2014, 5, 7)));
        assert!(cal.is_working_day(date(2014, 5, 8)));
    }

    #[test]
    fn test_human_rights_day() {
        // 2013-03-21 is a Thursday
        assert!(!SouthAfrica.is_working_day(date(2013, 3, 21)));
    }

    #[test]
    fn test_normal_business_day() {
        // 2013-08-08 is a Thursday
        assert!(SouthAfrica.is_working_day(date(2013, 8, 8)));
    }

    #[test]
    fn test_weekend_is_not_working_day() {
        assert!(!SouthAfrica.is_working_day(date(2013, 8, 10)));
        assert!(!SouthAfrica.is_working_day(date(2013, 8, 11)));
    }

    #[test]
    fn test_holidays_2014_are_sorted_and_complete() {
        let holidays = SouthAfrica.holidays(2014);
        let dates: Vec<NaiveDate> = holidays.iter().map(|h| h.date).collect();

        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        // 10 fixed, 2 Easter, 1 election, 1 Freedom Day substitute
        assert_eq!(holidays.len(), 14);
        assert!(
            holidays
                .iter()
                .any(|h| h.date == date(2014, 4, 28) && h.name == "Freedom Day (observed)")
        );
    }

    #[test]
    fn test_working_days_between_matches_daily_lookup() {
        let cal = SouthAfrica;
        for (start, end) in [
            (date(2011, 12, 20), date(2012, 1, 10)),
            (date(2013, 1, 1), date(2013, 12, 31)),
            (date(2011, 1, 1), date(2016, 12, 31)),
        ] {
            let daily = start
                .iter_days()
                .take_while(|d| *d <= end)
                .filter(|d| cal.is_working_day(*d))
                .count() as u32;
            assert_eq!(cal.working_days_between(start, end), daily, "{start}..{end}");
        }
    }

    #[test]
    fn test_working_days_heritage_week_2013() {
        // Tuesday 2013-09-24 is Heritage Day
        assert_eq!(
            SouthAfrica.working_days_between(date(2013, 9, 23), date(2013, 9, 27)),
            4
        );
    }

    #[test]
    fn test_working_days_reversed_range_is_zero() {
        assert_eq!(
            SouthAfrica.working_days_between(date(2013, 9, 27), date(2013, 9, 23)),
            0
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(SouthAfrica.name(), "South Africa");
    }
}
