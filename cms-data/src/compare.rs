//! Relationships between two measures: per-group comparisons and
//! per-record scatter pairs.

use crate::aggregation::Aggregation;
use crate::error::AggregationError;
use crate::group::{group_key, read_measure, Dimension};
use cms_records::{Field, Record};
use serde::Serialize;

/// Both measure totals for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonGroup {
    pub group: String,
    pub first: f64,
    pub second: f64,
}

/// Two measures summed side by side over the same groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub dimension: &'static str,
    pub first_label: &'static str,
    pub second_label: &'static str,
    pub groups: Vec<ComparisonGroup>,
}

impl Comparison {
    pub fn labels(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.group.clone()).collect()
    }
}

/// Group by `dimension` and sum `first` and `second` independently.
pub fn compare_two_measures<R: Record>(
    records: &[R],
    dimension: Dimension,
    first: R::Measure,
    second: R::Measure,
) -> Result<Comparison, AggregationError> {
    let mut firsts = Aggregation::new();
    let mut seconds = Aggregation::new();
    for (index, record) in records.iter().enumerate() {
        if let Some(key) = group_key(record, dimension, index)? {
            firsts.add(&key, read_measure(record, first, index)?);
            seconds.add(&key, read_measure(record, second, index)?);
        }
    }
    Ok(Comparison {
        dimension: dimension.label(),
        first_label: first.label(),
        second_label: second.label(),
        groups: firsts
            .iter()
            .map(|(group, total)| ComparisonGroup {
                group: group.to_string(),
                first: total,
                second: seconds.get(group).unwrap_or(0.0),
            })
            .collect(),
    })
}

/// One point of a scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Map every record to an `(x, y)` point, keeping order and count.
pub fn pair_for_scatter<R: Record>(
    records: &[R],
    x: R::Measure,
    y: R::Measure,
) -> Result<Vec<ScatterPoint>, AggregationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Ok(ScatterPoint {
                x: read_measure(record, x, index)?,
                y: read_measure(record, y, index)?,
            })
        })
        .collect()
}
