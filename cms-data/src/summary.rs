//! Sums, averages and tallies keyed by a single grouping dimension.

use crate::aggregation::Aggregation;
use crate::error::AggregationError;
use crate::group::{group_key, read_measure, Dimension};
use cms_records::Record;

/// Key used by [`count_by_field`] for records whose category is absent.
pub const MISSING_CATEGORY: &str = "None";

/// Sum `measure` per group of `dimension`.
pub fn sum_by<R: Record>(
    records: &[R],
    dimension: Dimension,
    measure: R::Measure,
) -> Result<Aggregation, AggregationError> {
    let mut sums = Aggregation::new();
    for (index, record) in records.iter().enumerate() {
        if let Some(key) = group_key(record, dimension, index)? {
            sums.add(&key, read_measure(record, measure, index)?);
        }
    }
    Ok(sums)
}

/// Average `measure` per group of `dimension`: group sum over group record count.
pub fn average_by<R: Record>(
    records: &[R],
    dimension: Dimension,
    measure: R::Measure,
) -> Result<Aggregation, AggregationError> {
    let mut sums = Aggregation::new();
    let mut counts = Aggregation::new();
    for (index, record) in records.iter().enumerate() {
        if let Some(key) = group_key(record, dimension, index)? {
            sums.add(&key, read_measure(record, measure, index)?);
            counts.add(&key, 1.0);
        }
    }
    // every key in `sums` was counted at least once
    Ok(sums
        .iter()
        .map(|(key, sum)| (key.to_string(), sum / counts.get(key).unwrap_or(1.0)))
        .collect())
}

/// Total of `measure` per city. Records without a city are left out.
pub fn sum_by_city<R: Record>(records: &[R], measure: R::Measure) -> Result<Aggregation, AggregationError> {
    sum_by(records, Dimension::City, measure)
}

/// Mean of `measure` per city. Records without a city are left out.
pub fn average_by_city<R: Record>(records: &[R], measure: R::Measure) -> Result<Aggregation, AggregationError> {
    average_by(records, Dimension::City, measure)
}

/// Number of records per city.
pub fn count_by_city<R: Record>(records: &[R]) -> Aggregation {
    records
        .iter()
        .filter_map(|record| record.city_name())
        .map(|name| (name.to_string(), 1.0))
        .collect()
}

/// Occurrences of each distinct value of a string field.
///
/// Values are kept verbatim, sentinels included. Records where the field is
/// absent are tallied under [`MISSING_CATEGORY`].
pub fn count_by_field<R: Record>(records: &[R], category: R::Category) -> Aggregation {
    records
        .iter()
        .map(|record| {
            let key = record.category(category).unwrap_or(MISSING_CATEGORY);
            (key.to_string(), 1.0)
        })
        .collect()
}

/// Total of `measure` per "YYYY-MM" month, in order of first appearance.
pub fn monthly_total<R: Record>(records: &[R], measure: R::Measure) -> Result<Aggregation, AggregationError> {
    sum_by(records, Dimension::Month, measure)
}

/// Grand total of `measure` across all records.
pub fn total<R: Record>(records: &[R], measure: R::Measure) -> Result<f64, AggregationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| read_measure(record, measure, index))
        .sum()
}
