//! Order bucketizer: period filtering, weekday grouping, date sorting

use std::cmp::Reverse;

use chrono::Datelike;

use crate::types::{Order, Period};

/// Outcome of filtering orders against a period.
///
/// `skipped` counts orders whose date could not be parsed. They are excluded
/// from every bucket (never silently counted as "today") and surfaced here so
/// callers can report them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub orders: Vec<Order>,
    pub skipped: usize,
}

/// Orders whose date falls within `[period.start, period.end]`, inclusive on
/// both ends, preserving original relative order.
pub fn filter_by_period(orders: &[Order], period: &Period) -> FilterOutcome {
    let mut matched = Vec::new();
    let mut skipped = 0;

    for order in orders {
        match order.parsed_date() {
            Some(date) => {
                if period.contains(date) {
                    matched.push(order.clone());
                }
            }
            None => {
                tracing::warn!(
                    order_id = ?order.id,
                    date = %order.date,
                    "unparsable order date, excluded from bucketing"
                );
                skipped += 1;
            }
        }
    }

    FilterOutcome {
        orders: matched,
        skipped,
    }
}

/// Partition orders by day-of-week, Sunday = index 0 through Saturday = 6.
///
/// Independent of any period filtering; compose with [`filter_by_period`]
/// first when a weekday breakdown within a bounded period is needed.
/// Unparsable dates are excluded.
pub fn group_by_weekday(orders: &[Order]) -> [Vec<Order>; 7] {
    let mut buckets: [Vec<Order>; 7] = Default::default();
    for order in orders {
        if let Some(date) = order.parsed_date() {
            let weekday = date.date().weekday().num_days_from_sunday();
            buckets[weekday as usize].push(order.clone());
        }
    }
    buckets
}

/// Stable sort, most recent date first. Orders with identical dates keep
/// their original relative order (pagination stays deterministic); orders
/// with unparsable dates sort last.
pub fn sort_by_date_descending(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by_cached_key(|o| Reverse(o.parsed_date()));
    sorted
}
