//! Monthly leave simulation.
//!
//! This module drives the leave state machine: a cursor walks a
//! [`SimulationWindow`] one calendar month at a time, charging due leave
//! against the balance, accruing the monthly allowance and rolling buckets
//! over at each new year. Every step produces a row of the [`Report`].
//!
//! # Example
//!
//! ```
//! use leave_sim::calendar::SouthAfrica;
//! use leave_sim::config::SimulationWindow;
//! use leave_sim::simulation;
//! use chrono::NaiveDate;
//!
//! let window = SimulationWindow::new(
//!     NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2012, 1, 1).unwrap(),
//! );
//! let report = simulation::run(&SouthAfrica, window)?;
//!
//! assert_eq!(report.rows().count(), 13);
//! # Ok::<(), leave_sim::error::LeaveError>(())
//! ```

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calendar::WorkingDayCalendar;
use crate::config::{ConfigLoader, LeaveDataset, SimulationWindow};
use crate::error::{LeaveError, LeaveResult};
use crate::models::{
    LeaveBalance, LeaveSchedule, Report, ReportLine, ReportRow, monthly_accrual,
};

/// The simulation state: the remaining schedule and the running balance.
#[derive(Debug, Clone)]
pub struct Simulation {
    schedule: LeaveSchedule,
    balance: LeaveBalance,
    monthly_accrual: Decimal,
}

impl Simulation {
    /// Creates a simulation over `schedule` with an empty balance.
    pub fn new(schedule: LeaveSchedule) -> Self {
        Self::with_balance(schedule, LeaveBalance::default())
    }

    /// Creates a simulation starting from an existing balance.
    pub fn with_balance(schedule: LeaveSchedule, balance: LeaveBalance) -> Self {
        Self {
            schedule,
            balance,
            monthly_accrual: monthly_accrual(),
        }
    }

    /// Builds and validates the schedule for `dataset`, measuring every
    /// interval against `calendar`.
    pub fn from_dataset<C>(dataset: &LeaveDataset, calendar: &C) -> LeaveResult<Self>
    where
        C: WorkingDayCalendar + ?Sized,
    {
        let schedule = LeaveSchedule::new(dataset.pairs(), calendar)?;
        debug!(
            calendar = calendar.name(),
            intervals = schedule.len(),
            "Built leave schedule"
        );
        Ok(Self::new(schedule))
    }

    /// The running balance.
    pub fn balance(&self) -> &LeaveBalance {
        &self.balance
    }

    /// The intervals not yet consumed.
    pub fn schedule(&self) -> &LeaveSchedule {
        &self.schedule
    }

    /// Walks the window month by month and returns the report.
    ///
    /// Each step consumes leave due at the cursor, records a row, advances the
    /// cursor one month and accrues. When the new cursor lands in January the
    /// balance rolls over and a separator line is recorded. The last row is the
    /// one dated on or before `window.end`.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::DateOutOfRange`] if the cursor cannot be advanced.
    pub fn run(&mut self, window: SimulationWindow) -> LeaveResult<Report> {
        info!(start = %window.start, end = %window.end, "Starting leave simulation");

        let mut report = Report::default();
        let mut cursor = window.start;

        while cursor <= window.end {
            let outcome = self.schedule.consume_due(cursor, &mut self.balance);
            report.lines.push(ReportLine::Month(ReportRow::new(
                cursor,
                &self.balance,
                outcome.leave_taken,
                outcome.warnings,
            )));

            cursor = next_month(cursor)?;
            self.balance.accrue(self.monthly_accrual);

            if cursor.month() == 1 {
                self.balance.rollover();
                debug!(year = cursor.year(), balance = %self.balance, "Rolled over leave");
                report.lines.push(ReportLine::Separator);
            }
        }

        info!(
            months = report.rows().count(),
            leave_taken = report.total_leave_taken(),
            shortfalls = report.warnings().count(),
            remaining = self.schedule.len(),
            "Leave simulation complete"
        );

        Ok(report)
    }
}

/// Runs the embedded historical dataset through `window` against `calendar`.
///
/// # Errors
///
/// Fails if the embedded dataset cannot be parsed, contains an invalid or
/// overlapping interval, or the window runs off the end of the calendar.
pub fn run<C>(calendar: &C, window: SimulationWindow) -> LeaveResult<Report>
where
    C: WorkingDayCalendar + ?Sized,
{
    let config = ConfigLoader::embedded()?;
    Simulation::from_dataset(config.dataset(), calendar)?.run(window)
}

fn next_month(date: NaiveDate) -> LeaveResult<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or(LeaveError::DateOutOfRange { date })
}
