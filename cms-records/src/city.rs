use serde::{Deserialize, Serialize};

/// A city as returned by `GET /city`.
///
/// Only the name is required by the city form, so `country` is often
/// `null`; both decode to `None`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub country: Option<String>,
}

/// The city back-link embedded in every reading.
///
/// Readings reference a city, they never own one; only the id and name
/// travel with the record.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CityRef {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CityRef {
    /// The city name, or `None` when the server sent a null or empty one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
