//! Aggregation of electricity and water supply records.
//!
//! This crate reduces flat record lists into grouped summaries suitable
//! for charting: per-city sums and averages, category tallies, per-month
//! totals, per-city monthly trends, scatter pairs and two-measure
//! comparisons.
//!
//! Every function is a single synchronous pass over a borrowed slice and
//! keeps no state between calls. Grouping follows one policy throughout:
//!
//! - a record missing the grouping field (city, area or date) is left out;
//! - a record whose measure is absent contributes `0.0` and still counts;
//! - a measure that is present but not finite is an [`AggregationError`].

pub mod aggregation;
pub mod compare;
pub mod error;
pub mod group;
pub mod summary;
pub mod trend;

pub use aggregation::Aggregation;
pub use compare::{compare_two_measures, pair_for_scatter, Comparison, ComparisonGroup, ScatterPoint};
pub use error::AggregationError;
pub use group::Dimension;
pub use summary::{
    average_by, average_by_city, count_by_city, count_by_field, monthly_total, sum_by, sum_by_city, total,
    MISSING_CATEGORY,
};
pub use trend::{monthly_trend_by_city, CityTrend, MonthTotal};
