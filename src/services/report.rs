//! Reporting facade composing calendar, bucketizer, and aggregator
//!
//! Everything here is recomputed from scratch on each call from the caller's
//! order snapshot and reference instant. No "current period" is cached
//! between calls, so midnight and month rollovers can never serve stale
//! bounds; the caller decides when to re-invoke.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::services::{aggregator, bucketizer, calendar};
use crate::types::{Order, Period, PeriodKind};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One sub-bucket of a report: a week of the month, or a weekday of the week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubBucket {
    /// Week number in walk order (months) or weekday index, Sunday = 0 (weeks)
    pub number: u32,
    pub label: String,
    pub total: u64,
    pub count: usize,
    /// Share of the parent bucket's total, 0.0 when the parent total is 0
    pub percentage: f64,
}

/// A bucketed summary of the orders falling in one period.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodReport {
    pub period: Period,
    pub label: String,
    /// Orders within the period, most recent first
    pub orders: Vec<Order>,
    pub total: u64,
    pub count: usize,
    /// Orders excluded because their date could not be parsed
    pub skipped: usize,
    /// Running average over days elapsed from period start to the reference
    pub daily_average: f64,
    /// Week number within the year (store convention, non-ISO); Week reports only
    pub week_number: Option<u32>,
    /// Weeks of the month (Month) or weekdays (Week); empty for Day
    pub sub_buckets: Vec<SubBucket>,
    /// Best-performing sub-bucket; `None` when every sub-bucket totals 0
    pub best_sub_bucket: Option<SubBucket>,
}

/// Stateless reporting entry points consumed by the presentation layer.
pub struct Reporter;

impl Reporter {
    /// Bucket `orders` into the period of `kind` containing `at` and compute
    /// totals, running daily average, and sub-bucket breakdowns.
    ///
    /// Pure over its inputs: the same snapshot and reference instant always
    /// produce a structurally equal report, and `orders` is never mutated.
    pub fn period_report(orders: &[Order], at: NaiveDateTime, kind: PeriodKind) -> PeriodReport {
        let period = calendar::bounds(at, kind);
        let outcome = bucketizer::filter_by_period(orders, &period);
        let total = aggregator::total(&outcome.orders);
        let daily_average = aggregator::average(total, aggregator::elapsed_days(&period, at));

        let sub_buckets = match kind {
            PeriodKind::Day => Vec::new(),
            PeriodKind::Week => Self::weekday_sub_buckets(&outcome.orders, total),
            PeriodKind::Month => Self::week_sub_buckets(&outcome.orders, at, total),
        };
        let best_sub_bucket = aggregator::best_bucket(&sub_buckets, |b| b.total).cloned();
        let week_number = match kind {
            PeriodKind::Week => Some(calendar::week_number_in_year(at)),
            _ => None,
        };

        let count = outcome.orders.len();
        PeriodReport {
            label: period.label(),
            period,
            orders: bucketizer::sort_by_date_descending(&outcome.orders),
            total,
            count,
            skipped: outcome.skipped,
            daily_average,
            week_number,
            sub_buckets,
            best_sub_bucket,
        }
    }

    /// Recompute the bounds of `kind` around `at`.
    ///
    /// Stateless by design: callers re-invoke this (on a tick or on demand)
    /// instead of relying on a cached "current period".
    pub fn refresh_boundary(at: NaiveDateTime, kind: PeriodKind) -> Period {
        calendar::bounds(at, kind)
    }

    /// One sub-bucket per week overlapping the month, numbered in walk order.
    fn week_sub_buckets(
        month_orders: &[Order],
        at: NaiveDateTime,
        month_total: u64,
    ) -> Vec<SubBucket> {
        calendar::weeks_of_month(at)
            .iter()
            .enumerate()
            .map(|(index, week)| {
                let outcome = bucketizer::filter_by_period(month_orders, week);
                let total = aggregator::total(&outcome.orders);
                SubBucket {
                    number: index as u32 + 1,
                    label: week.label(),
                    total,
                    count: outcome.orders.len(),
                    percentage: aggregator::percentage_of(total, month_total),
                }
            })
            .collect()
    }

    /// One sub-bucket per weekday, Sunday through Saturday.
    fn weekday_sub_buckets(week_orders: &[Order], week_total: u64) -> Vec<SubBucket> {
        bucketizer::group_by_weekday(week_orders)
            .iter()
            .enumerate()
            .map(|(weekday, orders)| {
                let total = aggregator::total(orders);
                SubBucket {
                    number: weekday as u32,
                    label: WEEKDAY_NAMES[weekday].to_string(),
                    total,
                    count: orders.len(),
                    percentage: aggregator::percentage_of(total, week_total),
                }
            })
            .collect()
    }
}
