//! Three-bucket leave balance.
//!
//! This module provides [`LeaveBalance`] and the fixed leave policy constants:
//! monthly accrual into the current bucket, cascading depletion across all
//! three buckets, and the annual rollover that ages buckets forward.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual leave allowance in working days.
pub const ANNUAL_LEAVE_DAYS: Decimal = Decimal::from_parts(26, 0, 0, false, 0);

/// The most prior-year carryover that feeds the accumulated reserve at rollover.
pub const ROLLOVER_CARRY_LIMIT: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Ceiling on the accumulated reserve after rollover.
pub const ACCUMULATED_CAP: Decimal = Decimal::from_parts(42, 0, 0, false, 0);

/// Returns the monthly accrual: the annual allowance over twelve, rounded to
/// two decimal places.
///
/// # Example
///
/// ```
/// use leave_sim::models::monthly_accrual;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_accrual(), Decimal::new(217, 2));
/// ```
pub fn monthly_accrual() -> Decimal {
    (ANNUAL_LEAVE_DAYS / Decimal::from(12)).round_dp(2)
}

/// A leave balance split into three buckets with distinct depletion
/// priorities.
///
/// * `current`: this accrual year's allotment, depleted first.
/// * `prior`: last year's carryover, depleted second.
/// * `accumulated`: long-term capped reserve, depleted last.
///
/// Buckets can go negative when leave is taken without cover. The total is not
/// clamped.
///
/// # Example
///
/// ```
/// use leave_sim::models::LeaveBalance;
/// use rust_decimal::Decimal;
///
/// let mut balance = LeaveBalance::new(Decimal::from(10), Decimal::from(5), Decimal::ZERO);
/// balance.deplete(Decimal::from(12));
///
/// assert_eq!(balance.current(), Decimal::ZERO);
/// assert_eq!(balance.prior(), Decimal::from(3));
/// assert_eq!(balance.accumulated(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    current: Decimal,
    prior: Decimal,
    accumulated: Decimal,
}

impl LeaveBalance {
    /// Creates a balance with explicit bucket values.
    pub fn new(current: Decimal, prior: Decimal, accumulated: Decimal) -> Self {
        Self {
            current,
            prior,
            accumulated,
        }
    }

    /// The current-year bucket.
    pub fn current(&self) -> Decimal {
        self.current
    }

    /// The prior-year carryover bucket.
    pub fn prior(&self) -> Decimal {
        self.prior
    }

    /// The accumulated reserve bucket.
    pub fn accumulated(&self) -> Decimal {
        self.accumulated
    }

    /// Sum of all three buckets.
    pub fn total(&self) -> Decimal {
        self.current + self.prior + self.accumulated
    }

    /// Returns `true` if the total balance covers `duration`.
    pub fn can_take(&self, duration: Decimal) -> bool {
        duration <= self.total()
    }

    /// Adds `amount` to the current-year bucket.
    pub fn accrue(&mut self, amount: Decimal) {
        self.current += amount;
    }

    /// Withdraws `duration` days, draining current, then prior, then
    /// accumulated.
    ///
    /// Once all three are exhausted the remaining shortfall is recorded as a
    /// negative value on the current bucket, not the accumulated one.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_sim::models::LeaveBalance;
    /// use rust_decimal::Decimal;
    ///
    /// let mut balance = LeaveBalance::new(Decimal::from(2), Decimal::ZERO, Decimal::ZERO);
    /// balance.deplete(Decimal::from(5));
    ///
    /// assert_eq!(balance.current(), Decimal::from(-3));
    /// assert_eq!(balance.prior(), Decimal::ZERO);
    /// assert_eq!(balance.accumulated(), Decimal::ZERO);
    /// ```
    pub fn deplete(&mut self, duration: Decimal) {
        let remainder = self.current - duration;
        if remainder >= Decimal::ZERO {
            self.current = remainder;
            return;
        }

        self.current = Decimal::ZERO;
        let remainder = self.prior - remainder.abs();
        if remainder >= Decimal::ZERO {
            self.prior = remainder;
            return;
        }

        self.prior = Decimal::ZERO;
        let remainder = self.accumulated - remainder.abs();
        if remainder >= Decimal::ZERO {
            self.accumulated = remainder;
            return;
        }

        self.accumulated = Decimal::ZERO;
        self.current = remainder;
    }

    /// Ages the buckets forward at the turn of the year.
    ///
    /// Up to [`ROLLOVER_CARRY_LIMIT`] days of prior carryover feed the
    /// accumulated reserve, which is then capped at [`ACCUMULATED_CAP`]. The
    /// current bucket becomes the new prior bucket and current restarts at
    /// zero. Whatever prior carryover is not moved into the reserve is
    /// forfeited.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_sim::models::LeaveBalance;
    /// use rust_decimal::Decimal;
    ///
    /// let mut balance = LeaveBalance::new(Decimal::from(20), Decimal::from(10), Decimal::from(35));
    /// balance.rollover();
    ///
    /// assert_eq!(balance.current(), Decimal::ZERO);
    /// assert_eq!(balance.prior(), Decimal::from(20));
    /// assert_eq!(balance.accumulated(), Decimal::from(42));
    /// ```
    pub fn rollover(&mut self) {
        self.accumulated += self.prior.min(ROLLOVER_CARRY_LIMIT);
        self.accumulated = self.accumulated.min(ACCUMULATED_CAP);
        self.prior = self.current;
        self.current = Decimal::ZERO;
    }
}

impl std::fmt::Display for LeaveBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.current.normalize(),
            self.prior.normalize(),
            self.accumulated.normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn balance(current: &str, prior: &str, accumulated: &str) -> LeaveBalance {
        LeaveBalance::new(dec(current), dec(prior), dec(accumulated))
    }

    #[test]
    fn test_monthly_accrual_is_2_17() {
        assert_eq!(monthly_accrual(), dec("2.17"));
    }

    #[test]
    fn test_policy_constants() {
        assert_eq!(ANNUAL_LEAVE_DAYS, dec("26"));
        assert_eq!(ROLLOVER_CARRY_LIMIT, dec("7"));
        assert_eq!(ACCUMULATED_CAP, dec("42"));
    }

    #[test]
    fn test_new_balance_is_empty() {
        let balance = LeaveBalance::default();
        assert_eq!(balance.total(), Decimal::ZERO);
    }

    #[test]
    fn test_accrue_only_touches_current() {
        let mut b = balance("1", "2", "3");
        b.accrue(dec("2.17"));
        assert_eq!(b, balance("3.17", "2", "3"));
    }

    /// LB-001: depletion within the current bucket
    #[test]
    fn test_deplete_within_current() {
        let mut b = balance("10", "5", "0");
        b.deplete(dec("4"));
        assert_eq!(b, balance("6", "5", "0"));
    }

    /// LB-002: depletion spills into prior
    #[test]
    fn test_deplete_spills_into_prior() {
        let mut b = balance("10", "5", "0");
        b.deplete(dec("12"));
        assert_eq!(b, balance("0", "3", "0"));
    }

    /// LB-003: depletion spills into accumulated
    #[test]
    fn test_deplete_spills_into_accumulated() {
        let mut b = balance("3", "2", "20");
        b.deplete(dec("9"));
        assert_eq!(b, balance("0", "0", "16"));
    }

    /// LB-004: full cascade leaves the residual on current
    #[test]
    fn test_deplete_residual_lands_on_current() {
        let mut b = balance("2", "0", "0");
        b.deplete(dec("5"));
        assert_eq!(b, balance("-3", "0", "0"));

        let mut b = balance("1", "1", "1");
        b.deplete(dec("10"));
        assert_eq!(b, balance("-7", "0", "0"));
    }

    #[test]
    fn test_deplete_exact_total_empties_all_buckets() {
        let mut b = balance("1.5", "2", "3");
        b.deplete(dec("6.5"));
        assert_eq!(b.total(), Decimal::ZERO);
        assert_eq!(b, balance("0", "0", "0"));
    }

    #[test]
    fn test_deplete_from_negative_current() {
        let mut b = balance("-3", "4", "0");
        b.deplete(dec("1"));
        // -3 - 1 = -4 overflows into prior
        assert_eq!(b, balance("0", "0", "0"));
    }

    #[test]
    fn test_can_take() {
        let b = balance("2", "3", "1");
        assert!(b.can_take(dec("6")));
        assert!(!b.can_take(dec("6.01")));
    }

    /// LB-005: rollover caps the accumulated reserve
    #[test]
    fn test_rollover_caps_accumulated() {
        let mut b = balance("20", "10", "35");
        b.rollover();
        assert_eq!(b, balance("0", "20", "42"));
    }

    #[test]
    fn test_rollover_carries_small_prior_in_full() {
        let mut b = balance("26.04", "4", "10");
        b.rollover();
        assert_eq!(b, balance("0", "26.04", "14"));
    }

    #[test]
    fn test_rollover_with_negative_prior_reduces_accumulated() {
        let mut b = balance("5", "-2", "10");
        b.rollover();
        assert_eq!(b, balance("0", "5", "8"));
    }

    #[test]
    fn test_display_normalizes() {
        let b = balance("2.170", "0", "14.00");
        assert_eq!(b.to_string(), "2.17, 0, 14");
    }

    #[test]
    fn test_serialize_balance() {
        let b = balance("2.17", "0", "7");
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.contains("\"current\":\"2.17\""));
        assert!(json.contains("\"accumulated\":\"7\""));
    }

    fn bucket() -> impl Strategy<Value = Decimal> {
        (-5_000i64..10_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #[test]
        fn prop_rollover_never_exceeds_cap(current in bucket(), prior in bucket(), accumulated in bucket()) {
            let mut b = LeaveBalance::new(current, prior, accumulated);
            b.rollover();
            prop_assert!(b.accumulated() <= ACCUMULATED_CAP);
            prop_assert_eq!(b.current(), Decimal::ZERO);
            prop_assert_eq!(b.prior(), current);
        }

        #[test]
        fn prop_deplete_then_accrue_conserves_total(
            current in 0i64..5_000,
            prior in 0i64..5_000,
            accumulated in 0i64..5_000,
            duration in 0u32..30,
        ) {
            let mut b = LeaveBalance::new(
                Decimal::new(current, 2),
                Decimal::new(prior, 2),
                Decimal::new(accumulated, 2),
            );
            let before = b.total();
            let duration = Decimal::from(duration);
            prop_assume!(b.can_take(duration));

            b.deplete(duration);
            prop_assert_eq!(b.total(), before - duration);

            b.accrue(duration);
            prop_assert_eq!(b.total(), before);
        }
    }
}
