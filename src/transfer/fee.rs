//! Fee calculation for scheduled transfers.
//!
//! The fee for a transfer depends on its amount and on the number of whole
//! calendar days between the creation date and the scheduled execution date.
//! The rules live in one ordered table; the first rule whose window contains
//! the input determines the fee, and anything that falls through every window
//! carries no fee. Windows overlap only at their boundaries, where the
//! earlier rule wins.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single fee rule: an amount/day-span window paired with a fee formula
/// of the form `amount * rate + flat`.
struct FeeRule {
    /// Exclusive lower bound on the amount, if any.
    amount_over: Option<Decimal>,
    /// Inclusive upper bound on the amount, if any.
    amount_up_to: Option<Decimal>,
    /// Inclusive lower bound on the day span.
    days_from: i64,
    /// Inclusive upper bound on the day span, if any.
    days_to: Option<i64>,
    /// Percentage applied to the amount.
    rate: Decimal,
    /// Flat fee added on top.
    flat: Decimal,
}

impl FeeRule {
    /// Checks whether this rule's window contains the given amount and day span.
    fn applies(&self, amount: Decimal, days: i64) -> bool {
        if let Some(over) = self.amount_over
            && amount <= over
        {
            return false;
        }
        if let Some(up_to) = self.amount_up_to
            && amount > up_to
        {
            return false;
        }
        if days < self.days_from {
            return false;
        }
        if let Some(to) = self.days_to
            && days > to
        {
            return false;
        }
        true
    }

    /// Computes this rule's fee for the given amount. Exact decimal
    /// arithmetic, no rounding.
    fn fee(&self, amount: Decimal) -> Decimal {
        amount * self.rate + self.flat
    }
}

/// The ordered fee rule table. The windows do not cover every input: amounts
/// up to 1000 scheduled ahead, amounts in (1000, 2000] outside days 1-10, and
/// amounts over 2000 within days 1-10 all fall through to a zero fee. Those
/// gaps are part of the business rules, not an oversight in the table.
static FEE_RULES: [FeeRule; 6] = [
    // Same day, amount up to 1000: 3% + 3 flat.
    FeeRule {
        amount_over: None,
        amount_up_to: Some(dec!(1000)),
        days_from: 0,
        days_to: Some(0),
        rate: dec!(0.03),
        flat: dec!(3),
    },
    // 1-10 days ahead, amount in (1000, 2000]: 9%.
    FeeRule {
        amount_over: Some(dec!(1000)),
        amount_up_to: Some(dec!(2000)),
        days_from: 1,
        days_to: Some(10),
        rate: dec!(0.09),
        flat: dec!(0),
    },
    // 11-20 days ahead, amount over 2000: 8.2%.
    FeeRule {
        amount_over: Some(dec!(2000)),
        amount_up_to: None,
        days_from: 11,
        days_to: Some(20),
        rate: dec!(0.082),
        flat: dec!(0),
    },
    // 21-30 days ahead, amount over 2000: 6.9%.
    FeeRule {
        amount_over: Some(dec!(2000)),
        amount_up_to: None,
        days_from: 21,
        days_to: Some(30),
        rate: dec!(0.069),
        flat: dec!(0),
    },
    // 31-40 days ahead, amount over 2000: 4.7%.
    FeeRule {
        amount_over: Some(dec!(2000)),
        amount_up_to: None,
        days_from: 31,
        days_to: Some(40),
        rate: dec!(0.047),
        flat: dec!(0),
    },
    // More than 40 days ahead, amount over 2000: 1.7%.
    FeeRule {
        amount_over: Some(dec!(2000)),
        amount_up_to: None,
        days_from: 41,
        days_to: None,
        rate: dec!(0.017),
        flat: dec!(0),
    },
];

/// Computes the fee for `amount` scheduled `days` whole calendar days ahead.
/// Returns zero when no rule matches, including for negative day spans.
pub fn fee_for(amount: Decimal, days: i64) -> Decimal {
    FEE_RULES
        .iter()
        .find(|rule| rule.applies(amount, days))
        .map(|rule| rule.fee(amount))
        .unwrap_or(Decimal::ZERO)
}

/// Computes the fee for a transfer created on `creation_date` and scheduled
/// for `schedule_date`.
pub fn compute_fee(amount: Decimal, creation_date: NaiveDate, schedule_date: NaiveDate) -> Decimal {
    fee_for(amount, days_between(creation_date, schedule_date))
}

/// Whole calendar days from `from` to `to`; negative when `to` lies in the past.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::{compute_fee, days_between, fee_for};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_same_day_fee() {
        assert_eq!(fee_for(dec!(500), 0), dec!(18));
        assert_eq!(fee_for(dec!(0), 0), dec!(3));
        // Upper amount bound is inclusive.
        assert_eq!(fee_for(dec!(1000), 0), dec!(33));
    }

    #[test]
    fn test_short_term_fee() {
        assert_eq!(fee_for(dec!(1500), 5), dec!(135));
        // Both amount bounds at their edges.
        assert_eq!(fee_for(dec!(1000.01), 5), dec!(90.0009));
        assert_eq!(fee_for(dec!(2000), 5), dec!(180));
    }

    #[test]
    fn test_long_term_fees() {
        assert_eq!(fee_for(dec!(2500), 15), dec!(205));
        assert_eq!(fee_for(dec!(3000), 25), dec!(207));
        assert_eq!(fee_for(dec!(2500), 35), dec!(117.5));
        assert_eq!(fee_for(dec!(5000), 45), dec!(85));
    }

    #[test]
    fn test_day_boundaries_select_the_tabulated_rule() {
        // Every edge of every day window, paired with the adjacent value.
        assert_eq!(fee_for(dec!(500), 0), dec!(18));
        assert_eq!(fee_for(dec!(500), 1), dec!(0));
        assert_eq!(fee_for(dec!(1500), 1), dec!(135));
        assert_eq!(fee_for(dec!(1500), 10), dec!(135));
        assert_eq!(fee_for(dec!(1500), 11), dec!(0));
        assert_eq!(fee_for(dec!(2500), 10), dec!(0));
        assert_eq!(fee_for(dec!(2500), 11), dec!(205));
        assert_eq!(fee_for(dec!(2500), 20), dec!(205));
        assert_eq!(fee_for(dec!(2500), 21), dec!(172.5));
        assert_eq!(fee_for(dec!(2500), 30), dec!(172.5));
        assert_eq!(fee_for(dec!(2500), 31), dec!(117.5));
        assert_eq!(fee_for(dec!(2500), 40), dec!(117.5));
        assert_eq!(fee_for(dec!(2500), 41), dec!(42.5));
    }

    #[test]
    fn test_amount_boundaries() {
        // 2000 exactly never reaches the over-2000 rules.
        assert_eq!(fee_for(dec!(2000), 15), dec!(0));
        assert_eq!(fee_for(dec!(2000.01), 15), dec!(164.000820));
        // 1000 exactly never reaches the short-term rule.
        assert_eq!(fee_for(dec!(1000), 5), dec!(0));
    }

    #[test]
    fn test_rule_table_gaps_yield_zero() {
        assert_eq!(fee_for(dec!(500), 3), dec!(0));
        assert_eq!(fee_for(dec!(1500), 0), dec!(0));
        assert_eq!(fee_for(dec!(1500), 25), dec!(0));
        assert_eq!(fee_for(dec!(3000), 5), dec!(0));
        assert_eq!(fee_for(dec!(3000), 0), dec!(0));
    }

    #[test]
    fn test_negative_days_never_match() {
        assert_eq!(fee_for(dec!(500), -1), dec!(0));
        assert_eq!(fee_for(dec!(2500), -15), dec!(0));
    }

    #[test]
    fn test_fee_is_exact_before_boundary_rounding() {
        // 1234.56 * 0.09 = 111.1104, kept at full precision.
        assert_eq!(fee_for(dec!(1234.56), 5), dec!(111.1104));
    }

    #[test]
    fn test_idempotence() {
        let first = fee_for(dec!(1500), 5);
        let second = fee_for(dec!(1500), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2026, 8, 1), date(2026, 8, 1)), 0);
        assert_eq!(days_between(date(2026, 8, 1), date(2026, 8, 26)), 25);
        assert_eq!(days_between(date(2026, 8, 1), date(2026, 7, 31)), -1);
        // Spans a month boundary.
        assert_eq!(days_between(date(2026, 8, 25), date(2026, 9, 4)), 10);
    }

    #[test]
    fn test_compute_fee_from_dates() {
        let creation = date(2026, 8, 1);
        assert_eq!(compute_fee(dec!(500), creation, creation), dec!(18));
        assert_eq!(compute_fee(dec!(1500), creation, date(2026, 8, 6)), dec!(135));
        assert_eq!(compute_fee(dec!(3000), creation, date(2026, 8, 26)), dec!(207));
        // Schedule date in the past falls through to zero.
        assert_eq!(compute_fee(dec!(500), creation, date(2026, 7, 20)), dec!(0));
    }
}
