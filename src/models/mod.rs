//! Core data models for the leave simulator.
//!
//! This module contains the leave interval, schedule and balance types that
//! make up the simulation state, plus the report they produce.

mod leave_balance;
mod leave_interval;
mod leave_schedule;
mod report;

pub use leave_balance::{
    ACCUMULATED_CAP, ANNUAL_LEAVE_DAYS, LeaveBalance, ROLLOVER_CARRY_LIMIT, monthly_accrual,
};
pub use leave_interval::LeaveInterval;
pub use leave_schedule::{ConsumptionOutcome, LeaveSchedule, ShortfallWarning};
pub use report::{REPORT_HEADER, Report, ReportLine, ReportRow};
