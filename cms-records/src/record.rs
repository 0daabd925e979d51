//! The accessor trait shared by every reading type.
//!
//! Aggregations never look fields up by name. Each record type declares a
//! closed set of numeric measures and string categories, and the trait maps
//! those enum values to the record's fields.

use crate::city::CityRef;
use std::fmt;

/// A typed field selector (a measure or a category) of a record type.
pub trait Field: Copy + fmt::Debug {
    /// Field name as it appears in the API JSON (camelCase).
    fn field_name(self) -> &'static str;

    /// Human readable label used for chart legends.
    fn label(self) -> &'static str;
}

/// One observation tied to a city and a date.
pub trait Record {
    type Measure: Field;
    type Category: Field;

    fn city(&self) -> Option<&CityRef>;

    fn area(&self) -> Option<&str>;

    /// The raw ISO date string as served by the API.
    fn date(&self) -> Option<&str>;

    /// Value of a numeric field; `None` when the field was absent or null.
    fn measure(&self, measure: Self::Measure) -> Option<f64>;

    /// Value of a string field; `None` when the field was absent or null.
    fn category(&self, category: Self::Category) -> Option<&str>;

    /// Name of the referenced city, `None` when the city or its name is missing.
    fn city_name(&self) -> Option<&str> {
        self.city().and_then(CityRef::name)
    }
}

/// The record collections exposed by the API.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RecordType {
    City,
    Electricity,
    WaterSupply,
}

impl RecordType {
    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            RecordType::City => "city",
            RecordType::Electricity => "electricity",
            RecordType::WaterSupply => "water-supply",
        }
    }

    /// File name used for JSON snapshots of this collection.
    pub fn file_name(self) -> String {
        format!("{}.json", self.path())
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
