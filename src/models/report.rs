//! Simulation report models.
//!
//! This module contains the [`Report`] produced by a simulation run and the
//! per-month [`ReportRow`] entries it is made of. The text rendering is the
//! `Display` implementation of [`Report`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{LeaveBalance, ShortfallWarning};

/// Column header printed above the monthly rows.
pub const REPORT_HEADER: &str = "Date, Compulsory 1, Compulsory 2, Accumulated, Leave taken";

/// The balance snapshot for one simulated month.
///
/// # Example
///
/// ```
/// use leave_sim::models::ReportRow;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let row = ReportRow {
///     date: NaiveDate::from_ymd_opt(2011, 6, 1).unwrap(),
///     current: Decimal::new(1085, 2),
///     prior: Decimal::ZERO,
///     accumulated: Decimal::ZERO,
///     leave_taken: 1,
///     warnings: vec![],
/// };
///
/// assert_eq!(row.total(), Decimal::new(1085, 2));
/// assert_eq!(row.to_string(), "2011-06-01, 10.85, 0, 0, Leave taken: 1 days");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// The cursor date for this step.
    pub date: NaiveDate,
    /// Current-year bucket after this step's consumption.
    pub current: Decimal,
    /// Prior-year bucket after this step's consumption.
    pub prior: Decimal,
    /// Accumulated bucket after this step's consumption.
    pub accumulated: Decimal,
    /// Working days of leave consumed at this step.
    pub leave_taken: u32,
    /// Shortfalls raised while consuming leave at this step.
    pub warnings: Vec<ShortfallWarning>,
}

impl ReportRow {
    /// Snapshots `balance` at `date`.
    pub fn new(
        date: NaiveDate,
        balance: &LeaveBalance,
        leave_taken: u32,
        warnings: Vec<ShortfallWarning>,
    ) -> Self {
        Self {
            date,
            current: balance.current(),
            prior: balance.prior(),
            accumulated: balance.accumulated(),
            leave_taken,
            warnings,
        }
    }

    /// Sum of the three buckets.
    pub fn total(&self) -> Decimal {
        self.current + self.prior + self.accumulated
    }
}

impl std::fmt::Display for ReportRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, ",
            self.date,
            self.current.normalize(),
            self.prior.normalize(),
            self.accumulated.normalize()
        )?;
        if self.leave_taken > 0 {
            write!(f, "Leave taken: {} days", self.leave_taken)?;
        }
        Ok(())
    }
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportLine {
    /// A monthly balance row.
    Month(ReportRow),
    /// Blank line marking a year rollover.
    Separator,
}

/// The full output of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Report lines in emission order.
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Iterates over the monthly rows, skipping separators.
    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Month(row) => Some(row),
            ReportLine::Separator => None,
        })
    }

    /// Total working days of leave consumed over the run.
    pub fn total_leave_taken(&self) -> u32 {
        self.rows().map(|row| row.leave_taken).sum()
    }

    /// Every shortfall raised over the run.
    pub fn warnings(&self) -> impl Iterator<Item = &ShortfallWarning> {
        self.rows().flat_map(|row| row.warnings.iter())
    }

    /// The last monthly row, i.e. the closing balance.
    pub fn closing(&self) -> Option<&ReportRow> {
        self.rows().last()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for line in &self.lines {
            match line {
                ReportLine::Month(row) => writeln!(f, "{row}")?,
                ReportLine::Separator => writeln!(f)?,
            }
        }
        Ok(())
    }
}
