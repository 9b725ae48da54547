//! Services for period bucketing and report aggregation

pub mod aggregator;
pub mod bucketizer;
pub mod calendar;
pub mod loader;
pub mod pager;
pub mod report;

pub use report::{PeriodReport, Reporter, SubBucket};
