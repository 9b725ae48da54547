//! Order types as delivered by the store backend

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single line of an order (one product/size/quantity)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: u32,
    pub model_name: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}

/// A customer order as fetched from the backend.
///
/// The reporting engine treats orders as read-only: it never mutates them and
/// never verifies that `total` matches the sum of line totals (the backend is
/// trusted for that).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Absent for orders not yet persisted by the backend
    #[serde(default)]
    pub id: Option<u32>,
    /// ISO-8601-compatible text, date-only or with time-of-day
    pub date: String,
    pub customer_name: String,
    /// Whole currency units (the domain currency has no minor units)
    pub total: u64,
    #[serde(default)]
    pub line_items: Vec<OrderLine>,
}

impl Order {
    /// Parse the order date, accepting the textual shapes the backend emits.
    ///
    /// Tried in order: RFC 3339 (offset is dropped, the civil time is kept),
    /// naive `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`, and bare
    /// `YYYY-MM-DD` (taken as midnight). Returns `None` for anything else;
    /// such orders are excluded from every bucket.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        let s = self.date.trim();

        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_local());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Some(dt);
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return d.and_hms_opt(0, 0, 0);
        }

        None
    }
}
