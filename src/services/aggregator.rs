//! Aggregation and ranking over bucketized orders
//!
//! Pure functions with structurally guarded arithmetic: zero divisors and
//! empty inputs degrade to 0 / `None`, they never error.

use chrono::NaiveDateTime;

use crate::types::{Order, Period};

/// Sum of `order.total` over the collection; empty yields 0.
pub fn total(orders: &[Order]) -> u64 {
    orders.iter().map(|o| o.total).sum()
}

/// Inclusive calendar-day count from `period.start` through
/// `min(now, period.end)`.
///
/// For an in-progress period this counts only the days elapsed so far, so
/// running daily averages stay meaningful before the period completes.
/// Yields 0 when `now` precedes the period entirely.
pub fn elapsed_days(period: &Period, now: NaiveDateTime) -> i64 {
    let effective_end = now.min(period.end);
    if effective_end < period.start {
        return 0;
    }
    (effective_end.date() - period.start.date()).num_days() + 1
}

/// Running daily average: `total / elapsed_days`, or 0.0 when no days have
/// elapsed (never divides by zero).
pub fn average(total: u64, elapsed_days: i64) -> f64 {
    if elapsed_days <= 0 {
        return 0.0;
    }
    total as f64 / elapsed_days as f64
}

/// Percentage of `part` relative to `whole`; 0.0 when `whole` is 0.
pub fn percentage_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

/// The bucket with the strictly greatest `key`, scanning in order.
///
/// The running best starts at 0, so a set of all-zero buckets yields `None`
/// rather than a zero-total bucket, and the first bucket wins ties (strict
/// `>` only).
pub fn best_bucket<T, F>(buckets: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> u64,
{
    let mut best = None;
    let mut best_value = 0u64;
    for bucket in buckets {
        let value = key(bucket);
        if value > best_value {
            best_value = value;
            best = Some(bucket);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calendar;
    use crate::types::Order;
    use chrono::NaiveDate;

    fn order(total: u64) -> Order {
        Order {
            id: None,
            date: "2025-03-12".to_string(),
            customer_name: "client".to_string(),
            total,
            line_items: Vec::new(),
        }
    }

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    // ========== total tests ==========

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(total(&[]), 0);
    }

    #[test]
    fn test_total_sums_orders() {
        let orders = vec![order(100), order(200), order(300)];
        assert_eq!(total(&orders), 600);
    }

    // ========== elapsed_days tests ==========

    #[test]
    fn test_elapsed_days_mid_month() {
        let period = calendar::month_bounds(dt(2025, 3, 1, 0));
        assert_eq!(elapsed_days(&period, dt(2025, 3, 15, 14)), 15);
    }

    #[test]
    fn test_elapsed_days_first_day_counts_as_one() {
        let period = calendar::month_bounds(dt(2025, 3, 1, 0));
        assert_eq!(elapsed_days(&period, dt(2025, 3, 1, 9)), 1);
    }

    #[test]
    fn test_elapsed_days_clamps_to_period_end() {
        let period = calendar::month_bounds(dt(2025, 4, 1, 0));
        // Reference far past the month: full 30 days, never more
        assert_eq!(elapsed_days(&period, dt(2025, 7, 1, 0)), 30);
    }

    #[test]
    fn test_elapsed_days_before_period_is_zero() {
        let period = calendar::month_bounds(dt(2025, 3, 1, 0));
        assert_eq!(elapsed_days(&period, dt(2025, 2, 27, 12)), 0);
    }

    #[test]
    fn test_elapsed_days_full_leap_february() {
        let period = calendar::month_bounds(dt(2024, 2, 1, 0));
        assert_eq!(elapsed_days(&period, dt(2024, 2, 29, 23)), 29);
    }

    // ========== average tests ==========

    #[test]
    fn test_average_zero_total() {
        assert_eq!(average(0, 5), 0.0);
    }

    #[test]
    fn test_average_zero_days_never_divides() {
        assert_eq!(average(300, 0), 0.0);
        assert_eq!(average(300, -1), 0.0);
    }

    #[test]
    fn test_average_plain_division() {
        assert_eq!(average(300, 3), 100.0);
    }

    // ========== percentage_of tests ==========

    #[test]
    fn test_percentage_of_zero_whole() {
        assert_eq!(percentage_of(50, 0), 0.0);
    }

    #[test]
    fn test_percentage_of_part() {
        assert_eq!(percentage_of(25, 100), 25.0);
        assert_eq!(percentage_of(100, 100), 100.0);
    }

    #[test]
    fn test_percentages_of_partition_sum_to_hundred() {
        let parts = [150u64, 250, 600];
        let whole: u64 = parts.iter().sum();
        let sum: f64 = parts.iter().map(|p| percentage_of(*p, whole)).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    // ========== best_bucket tests ==========

    #[test]
    fn test_best_bucket_all_zero_is_none() {
        let buckets = [0u64, 0, 0];
        assert!(best_bucket(&buckets, |b| *b).is_none());
    }

    #[test]
    fn test_best_bucket_first_strict_maximum_wins() {
        let buckets = [50u64, 120, 120];
        let best = best_bucket(&buckets, |b| *b).unwrap();
        // Index 1 wins the tie against index 2
        assert!(std::ptr::eq(best, &buckets[1]));
    }

    #[test]
    fn test_best_bucket_empty_is_none() {
        let buckets: [u64; 0] = [];
        assert!(best_bucket(&buckets, |b| *b).is_none());
    }

    #[test]
    fn test_best_bucket_single_nonzero() {
        let buckets = [0u64, 0, 7];
        let best = best_bucket(&buckets, |b| *b).unwrap();
        assert_eq!(*best, 7);
    }
}
