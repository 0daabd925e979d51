use std::fmt;

/// Malformed input found while aggregating.
///
/// Missing fields are not errors; these variants only cover values that
/// are present but cannot be used.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationError {
    /// A numeric field holds NaN or an infinity.
    MalformedValue {
        field: &'static str,
        index: usize,
        value: f64,
    },
    /// A date field is not an ISO date or date-time.
    InvalidDate { index: usize, value: String },
}

impl fmt::Display for AggregationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationError::MalformedValue { field, index, value } => {
                write!(f, "record {}: field `{}` holds non-numeric value {}", index, field, value)
            }
            AggregationError::InvalidDate { index, value } => {
                write!(f, "record {}: date {:?} is not an ISO date", index, value)
            }
        }
    }
}

impl std::error::Error for AggregationError {}
