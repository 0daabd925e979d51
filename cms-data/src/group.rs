//! Grouping keys and measure reads shared by every aggregation.

use crate::error::AggregationError;
use cms_records::{Field, Record};
use cms_utils::dates;

/// The dimension records are bucketed by.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Dimension {
    /// `record.city.name`
    City,
    /// `record.area`
    Area,
    /// Year-month prefix ("YYYY-MM") of `record.date`, as written
    Month,
}

impl Dimension {
    pub fn label(self) -> &'static str {
        match self {
            Dimension::City => "City",
            Dimension::Area => "Area",
            Dimension::Month => "Month",
        }
    }
}

/// Grouping key of the record at `index`, `None` when the field is missing.
pub(crate) fn group_key<R: Record>(
    record: &R,
    dimension: Dimension,
    index: usize,
) -> Result<Option<String>, AggregationError> {
    match dimension {
        Dimension::City => Ok(record.city_name().map(str::to_string)),
        Dimension::Area => Ok(record.area().map(str::to_string)),
        Dimension::Month => record
            .date()
            .map(|date| {
                dates::month_key(date).map_err(|e| AggregationError::InvalidDate { index, value: e.0 })
            })
            .transpose(),
    }
}

/// Read a measure of the record at `index`.
///
/// Absent values read as `0.0`; NaN and infinities are rejected.
pub(crate) fn read_measure<R: Record>(
    record: &R,
    measure: R::Measure,
    index: usize,
) -> Result<f64, AggregationError> {
    match record.measure(measure) {
        None => Ok(0.0),
        Some(value) if value.is_finite() => Ok(value),
        Some(value) => Err(AggregationError::MalformedValue {
            field: measure.field_name(),
            index,
            value,
        }),
    }
}
