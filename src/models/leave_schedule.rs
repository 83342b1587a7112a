//! Ordered schedule of historical leave.
//!
//! This module contains [`LeaveSchedule`], which validates a set of leave
//! intervals once at construction and then hands them out front-to-back as
//! the simulation cursor reaches them.

use std::collections::VecDeque;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::WorkingDayCalendar;
use crate::error::{LeaveError, LeaveResult};

use super::{LeaveBalance, LeaveInterval};

/// Raised when leave is consumed without enough balance to cover it.
///
/// This is diagnostic only; consumption still happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallWarning {
    /// Start of the interval that could not be covered.
    pub start_date: NaiveDate,
    /// End of the interval that could not be covered.
    pub end_date: NaiveDate,
    /// Working days charged for the interval.
    pub duration: u32,
    /// Total balance available before the interval was charged.
    pub available: Decimal,
}

impl std::fmt::Display for ShortfallWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Not enough leave: {} ({} - {}), {} available",
            self.duration,
            self.start_date,
            self.end_date,
            self.available.normalize()
        )
    }
}

/// What a single [`LeaveSchedule::consume_due`] call took from the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsumptionOutcome {
    /// Working days charged across all consumed intervals.
    pub leave_taken: u32,
    /// Intervals removed from the schedule, in order.
    pub consumed: Vec<LeaveInterval>,
    /// Shortfalls detected while charging.
    pub warnings: Vec<ShortfallWarning>,
}

/// An ordered, non-overlapping queue of leave intervals.
///
/// # Example
///
/// ```
/// use leave_sim::calendar::SouthAfrica;
/// use leave_sim::models::{LeaveBalance, LeaveSchedule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let mut schedule = LeaveSchedule::new(
///     vec![(d(2013, 9, 23), d(2013, 9, 27)), (d(2013, 8, 8), d(2013, 8, 8))],
///     &SouthAfrica,
/// )?;
///
/// let mut balance = LeaveBalance::new(Decimal::from(10), Decimal::ZERO, Decimal::ZERO);
/// let outcome = schedule.consume_due(d(2013, 8, 1), &mut balance);
///
/// assert_eq!(outcome.leave_taken, 1);
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(balance.current(), Decimal::from(9));
/// # Ok::<(), leave_sim::error::LeaveError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaveSchedule {
    intervals: VecDeque<LeaveInterval>,
}

impl LeaveSchedule {
    /// Builds a schedule from `(start, end)` pairs in any order.
    ///
    /// Every pair is measured against `calendar`, the intervals are sorted by
    /// start date (stable for equal starts) and then checked for overlap.
    ///
    /// # Errors
    ///
    /// * [`LeaveError::InvalidInterval`] if any pair starts after it ends.
    /// * [`LeaveError::OverlappingLeave`] naming the first adjacent pair where
    ///   the earlier interval does not end before the later one starts.
    pub fn new<I, C>(pairs: I, calendar: &C) -> LeaveResult<Self>
    where
        I: IntoIterator<Item = (NaiveDate, NaiveDate)>,
        C: WorkingDayCalendar + ?Sized,
    {
        let mut intervals = pairs
            .into_iter()
            .map(|(start, end)| LeaveInterval::new(start, end, calendar))
            .collect::<LeaveResult<Vec<_>>>()?;

        intervals.sort_by_key(|interval| interval.start_date());

        if let Some(pair) = intervals
            .windows(2)
            .find(|pair| pair[0].end_date() >= pair[1].start_date())
        {
            return Err(LeaveError::OverlappingLeave {
                previous: pair[0].to_string(),
                next: pair[1].to_string(),
            });
        }

        Ok(Self {
            intervals: intervals.into(),
        })
    }

    /// Number of intervals not yet consumed.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` once every interval has been consumed.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The earliest interval not yet consumed.
    pub fn peek(&self) -> Option<&LeaveInterval> {
        self.intervals.front()
    }

    /// Iterates over the remaining intervals in start-date order.
    pub fn iter(&self) -> impl Iterator<Item = &LeaveInterval> {
        self.intervals.iter()
    }

    /// Charges every interval due at `reference` against `balance` and removes
    /// it from the schedule.
    ///
    /// Due intervals always form a prefix of the schedule, so this stops at the
    /// first interval that is not yet due. If the balance cannot cover an
    /// interval a [`ShortfallWarning`] is recorded and logged, but the interval
    /// is still charged.
    pub fn consume_due(
        &mut self,
        reference: NaiveDate,
        balance: &mut LeaveBalance,
    ) -> ConsumptionOutcome {
        let mut outcome = ConsumptionOutcome::default();

        while self
            .intervals
            .front()
            .is_some_and(|interval| interval.is_due(reference))
        {
            let Some(interval) = self.intervals.pop_front() else {
                break;
            };
            let duration = Decimal::from(interval.working_duration());

            if !balance.can_take(duration) {
                let shortfall = ShortfallWarning {
                    start_date: interval.start_date(),
                    end_date: interval.end_date(),
                    duration: interval.working_duration(),
                    available: balance.total(),
                };
                warn!(%reference, %shortfall, "Insufficient leave balance");
                outcome.warnings.push(shortfall);
            }

            balance.deplete(duration);
            debug!(%reference, %interval, balance = %balance, "Consumed leave");

            outcome.leave_taken += interval.working_duration();
            outcome.consumed.push(interval);
        }

        outcome
    }
}
