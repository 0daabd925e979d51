//! Conversions from aggregation results to chart series.
//!
//! All formatters are pure: the same input always yields the same series,
//! colours included.

use crate::models::{ChartSeries, ChartType, Color, Dataset, DatasetData};
use crate::palette::{color_for_key, Palette, BLUE, RED};
use cms_data::{average_by_city, Aggregation, AggregationError, CityTrend, Comparison, ScatterPoint};
use cms_records::{WaterSupplyMeasure, WaterSupplyRecord};
use std::collections::{BTreeSet, HashMap};

/// Label of the reservoir level chart's only dataset.
pub const RESERVOIR_LEVELS_LABEL: &str = "Reservoir Levels (%)";

const BORDER_WIDTH: u32 = 1;
const POINT_RADIUS: u32 = 5;
const TREND_TENSION: f64 = 0.1;

/// One dataset over the aggregation's keys, coloured per category from the
/// standard palette.
pub fn to_labeled_series(aggregation: &Aggregation, label: &str) -> ChartSeries {
    let palette = Palette::STANDARD;
    let labels: Vec<String> = aggregation.keys().map(str::to_string).collect();
    let count = labels.len();
    let mut dataset = Dataset::new(
        label,
        DatasetData::Values(aggregation.values().collect()),
        Color::PerItem(palette.borders(count)),
    );
    dataset.background_color = Some(Color::PerItem(palette.backgrounds(count)));
    dataset.border_width = Some(BORDER_WIDTH);
    ChartSeries::new(labels, vec![dataset])
}

/// [`to_labeled_series`] with the chart kind recorded on the series.
pub fn to_typed_series(aggregation: &Aggregation, label: &str, chart_type: ChartType) -> ChartSeries {
    to_labeled_series(aggregation, label).with_type(chart_type)
}

/// One scatter dataset with the points unchanged, coloured per point.
pub fn to_scatter_series(points: &[ScatterPoint], label: &str) -> ChartSeries {
    let palette = Palette::STANDARD;
    let mut dataset = Dataset::new(
        label,
        DatasetData::Points(points.to_vec()),
        Color::PerItem(palette.borders(points.len())),
    );
    dataset.background_color = Some(Color::PerItem(palette.backgrounds(points.len())));
    dataset.point_radius = Some(POINT_RADIUS);
    ChartSeries::new(Vec::new(), vec![dataset]).with_type(ChartType::Scatter)
}

/// Two datasets over the comparison's groups, red for the first measure and
/// blue for the second regardless of how many groups there are.
pub fn to_comparison_series(comparison: &Comparison) -> ChartSeries {
    let first = comparison.groups.iter().map(|g| g.first).collect();
    let second = comparison.groups.iter().map(|g| g.second).collect();
    ChartSeries::new(
        comparison.labels(),
        vec![
            fixed_color_dataset(comparison.first_label, first, RED.background, RED.border),
            fixed_color_dataset(comparison.second_label, second, BLUE.background, BLUE.border),
        ],
    )
}

fn fixed_color_dataset(label: &str, values: Vec<f64>, background: &str, border: &str) -> Dataset {
    let mut dataset = Dataset::new(label, DatasetData::Values(values), Color::Single(border.to_string()));
    dataset.background_color = Some(Color::Single(background.to_string()));
    dataset.border_width = Some(BORDER_WIDTH);
    dataset
}

/// One line per city over the sorted union of every city's months.
///
/// Months a city has no record for are filled with `0.0`, so every dataset
/// is exactly as long as the label axis.
pub fn to_multi_city_trend_series(trends: &[CityTrend]) -> ChartSeries {
    let labels: Vec<String> = trends
        .iter()
        .flat_map(|city| city.trends.iter().map(|t| t.month.clone()))
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let datasets = trends
        .iter()
        .map(|city| {
            let totals: HashMap<&str, f64> = city.trends.iter().map(|t| (t.month.as_str(), t.total)).collect();
            let data = labels
                .iter()
                .map(|month| totals.get(month.as_str()).copied().unwrap_or(0.0))
                .collect();
            let mut dataset = Dataset::new(
                &city.city_name,
                DatasetData::Values(data),
                Color::Single(color_for_key(&city.city_name)),
            );
            dataset.fill = Some(false);
            dataset.tension = Some(TREND_TENSION);
            dataset
        })
        .collect();

    ChartSeries::new(labels, datasets)
}

/// Average reservoir level per city as a labeled series.
pub fn to_reservoir_average_series(records: &[WaterSupplyRecord]) -> Result<ChartSeries, AggregationError> {
    let averages = average_by_city(records, WaterSupplyMeasure::ReservoirLevelPercentage)?;
    Ok(to_labeled_series(&averages, RESERVOIR_LEVELS_LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_data::{compare_two_measures, monthly_trend_by_city, Dimension, MonthTotal};
    use serde_json::json;

    fn trend(city: &str, months: &[(&str, f64)]) -> CityTrend {
        CityTrend {
            city_name: city.to_string(),
            trends: months
                .iter()
                .map(|(month, total)| MonthTotal {
                    month: month.to_string(),
                    total: *total,
                })
                .collect(),
        }
    }

    fn water(value: serde_json::Value) -> Vec<WaterSupplyRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_labeled_series_keeps_key_order() {
        let mut totals = Aggregation::new();
        totals.add("Hanoi", 30.0);
        totals.add("Hue", 5.0);
        let series = to_labeled_series(&totals, "Total Consumption");
        assert_eq!(series.labels, vec!["Hanoi", "Hue"]);
        assert_eq!(series.datasets.len(), 1);
        assert_eq!(series.datasets[0].label, "Total Consumption");
        assert_eq!(series.datasets[0].data.values(), Some(&[30.0, 5.0][..]));
        assert_eq!(series.datasets[0].border_width, Some(1));
        assert_eq!(series.chart_type, None);
    }

    #[test]
    fn test_labeled_series_colors_cycle_after_eight() {
        let mut totals = Aggregation::new();
        for i in 0..10 {
            totals.add(&format!("City {}", i), i as f64);
        }
        let series = to_labeled_series(&totals, "Totals");
        let dataset = &series.datasets[0];
        assert_eq!(series.labels.len(), dataset.data.len());

        let background = dataset.background_color.as_ref().unwrap();
        assert_eq!(background.at(8), background.at(0));
        assert_eq!(background.at(9), background.at(1));
        assert_ne!(background.at(1), background.at(0));
        assert_eq!(dataset.border_color.at(8), dataset.border_color.at(0));
        assert_eq!(background.at(10), None);
    }

    #[test]
    fn test_typed_series() {
        let mut counts = Aggregation::new();
        counts.add("Storm", 2.0);
        let series = to_typed_series(&counts, "Outage Reasons", ChartType::Pie);
        assert_eq!(serde_json::to_value(&series).unwrap()["type"], json!("pie"));
    }

    #[test]
    fn test_empty_aggregation() {
        let series = to_labeled_series(&Aggregation::new(), "Empty");
        assert!(series.labels.is_empty());
        assert!(series.datasets[0].data.is_empty());
    }

    #[test]
    fn test_scatter_series() {
        let points: Vec<ScatterPoint> = (0..9).map(|i| ScatterPoint { x: i as f64, y: 1.0 }).collect();
        let series = to_scatter_series(&points, "Outage Impact");
        assert_eq!(series.chart_type, Some(ChartType::Scatter));
        assert!(series.labels.is_empty());
        let dataset = &series.datasets[0];
        assert_eq!(dataset.data, DatasetData::Points(points));
        assert_eq!(dataset.point_radius, Some(5));
        let background = dataset.background_color.as_ref().unwrap();
        assert_eq!(background.at(8), background.at(0));
        assert_eq!(background.at(3), Some("rgba(231,233,237,0.4)"));
    }

    #[test]
    fn test_comparison_series_uses_fixed_colors() {
        let records = water(json!([
            {"city": {"name": "Hanoi"}, "consumptionLiters": 80, "productionLiters": 100},
            {"city": {"name": "Hue"}, "consumptionLiters": 55, "productionLiters": 50},
            {"city": {"name": "Da Nang"}, "consumptionLiters": 10, "productionLiters": 12}
        ]));
        let comparison = compare_two_measures(
            &records,
            Dimension::City,
            WaterSupplyMeasure::ConsumptionLiters,
            WaterSupplyMeasure::ProductionLiters,
        )
        .unwrap();
        let series = to_comparison_series(&comparison);
        assert_eq!(series.labels, vec!["Hanoi", "Hue", "Da Nang"]);
        assert_eq!(series.datasets.len(), 2);

        let consumption = &series.datasets[0];
        assert_eq!(consumption.label, "Consumption (Liters)");
        assert_eq!(consumption.data.values(), Some(&[80.0, 55.0, 10.0][..]));
        assert_eq!(consumption.background_color, Some(Color::Single("rgba(255, 99, 132, 0.6)".to_string())));
        assert_eq!(consumption.border_color, Color::Single("rgba(255, 99, 132, 1)".to_string()));

        let production = &series.datasets[1];
        assert_eq!(production.label, "Production (Liters)");
        assert_eq!(production.data.values(), Some(&[100.0, 50.0, 12.0][..]));
        assert_eq!(production.border_color, Color::Single("rgba(54, 162, 235, 1)".to_string()));
    }

    #[test]
    fn test_multi_city_trend_zero_fills_gaps() {
        let trends = vec![
            trend("Hanoi", &[("2024-01", 10.0)]),
            trend("Hue", &[("2024-02", 5.0)]),
        ];
        let series = to_multi_city_trend_series(&trends);
        assert_eq!(series.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(series.datasets[0].label, "Hanoi");
        assert_eq!(series.datasets[0].data.values(), Some(&[10.0, 0.0][..]));
        assert_eq!(series.datasets[1].label, "Hue");
        assert_eq!(series.datasets[1].data.values(), Some(&[0.0, 5.0][..]));
        for dataset in &series.datasets {
            assert_eq!(dataset.data.len(), series.labels.len());
            assert_eq!(dataset.fill, Some(false));
            assert_eq!(dataset.tension, Some(0.1));
        }
    }

    #[test]
    fn test_multi_city_trend_sorts_months() {
        let trends = vec![trend("Hanoi", &[("2024-03", 3.0), ("2023-11", 1.0), ("2024-01", 2.0)])];
        let series = to_multi_city_trend_series(&trends);
        assert_eq!(series.labels, vec!["2023-11", "2024-01", "2024-03"]);
        assert_eq!(series.datasets[0].data.values(), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_multi_city_trend_colors_are_deterministic() {
        let records = water(json!([
            {"city": {"name": "Hanoi"}, "rainfallMm": 3, "date": "2024-01-02"},
            {"city": {"name": "Hue"}, "rainfallMm": 4, "date": "2024-01-09"}
        ]));
        let trends = monthly_trend_by_city(&records, WaterSupplyMeasure::RainfallMm).unwrap();
        let first = to_multi_city_trend_series(&trends);
        let second = to_multi_city_trend_series(&trends);
        assert_eq!(first, second);
        assert_eq!(first.datasets[0].border_color, Color::Single(color_for_key("Hanoi")));
    }

    #[test]
    fn test_multi_city_trend_empty() {
        let series = to_multi_city_trend_series(&[]);
        assert!(series.labels.is_empty());
        assert!(series.datasets.is_empty());
    }

    #[test]
    fn test_reservoir_average_series() {
        let records = water(json!([
            {"city": {"name": "Hanoi"}, "reservoirLevelPercentage": 70},
            {"city": {"name": "Hanoi"}, "reservoirLevelPercentage": 50},
            {"city": {"name": "Hue"}, "reservoirLevelPercentage": 40},
            {"reservoirLevelPercentage": 100}
        ]));
        let series = to_reservoir_average_series(&records).unwrap();
        assert_eq!(series.labels, vec!["Hanoi", "Hue"]);
        assert_eq!(series.datasets[0].label, "Reservoir Levels (%)");
        assert_eq!(series.datasets[0].data.values(), Some(&[60.0, 40.0][..]));
        assert_eq!(series.datasets[0].border_width, Some(1));
    }

    #[test]
    fn test_reservoir_average_series_rejects_malformed_level() {
        let mut records = water(json!([{"city": {"name": "Hue"}}]));
        records[0].reservoir_level_percentage = Some(f64::NAN);
        assert!(to_reservoir_average_series(&records).is_err());
    }
}
