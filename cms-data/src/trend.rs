//! Per-city monthly breakdowns.

use crate::aggregation::Aggregation;
use crate::error::AggregationError;
use crate::group::{group_key, read_measure, Dimension};
use cms_records::Record;
use serde::Serialize;
use std::collections::HashMap;

/// Total of one month for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    /// "YYYY-MM"
    pub month: String,
    pub total: f64,
}

/// Monthly totals of one city, months in order of first appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityTrend {
    pub city_name: String,
    pub trends: Vec<MonthTotal>,
}

impl CityTrend {
    pub fn total_for(&self, month: &str) -> Option<f64> {
        self.trends.iter().find(|t| t.month == month).map(|t| t.total)
    }
}

/// Group by city, then by month, summing `measure`.
///
/// Cities appear in order of first appearance and only carry months they
/// have records for. Records missing a city or a date are left out.
pub fn monthly_trend_by_city<R: Record>(
    records: &[R],
    measure: R::Measure,
) -> Result<Vec<CityTrend>, AggregationError> {
    let mut cities: Vec<(String, Aggregation)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let Some(city) = record.city_name() else {
            continue;
        };
        let Some(month) = group_key(record, Dimension::Month, index)? else {
            continue;
        };
        let value = read_measure(record, measure, index)?;
        let position = *positions.entry(city.to_string()).or_insert_with(|| {
            cities.push((city.to_string(), Aggregation::new()));
            cities.len() - 1
        });
        cities[position].1.add(&month, value);
    }

    Ok(cities
        .into_iter()
        .map(|(city_name, months)| CityTrend {
            city_name,
            trends: months
                .iter()
                .map(|(month, total)| MonthTotal {
                    month: month.to_string(),
                    total,
                })
                .collect(),
        })
        .collect())
}
