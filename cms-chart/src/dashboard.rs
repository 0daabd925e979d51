//! The overview dashboard: summary cards plus every electricity and water
//! supply chart, built from one snapshot of the API collections.

use crate::formatters::{
    to_comparison_series, to_multi_city_trend_series, to_reservoir_average_series, to_scatter_series,
    to_typed_series,
};
use crate::models::{ChartSeries, ChartType};
use cms_data::{
    average_by_city, compare_two_measures, count_by_field, monthly_total, monthly_trend_by_city,
    pair_for_scatter, sum_by, sum_by_city, total, AggregationError, Dimension,
};
use cms_records::{
    ElectricityCategory, ElectricityMeasure, ElectricityRecord, Snapshot, WaterSupplyMeasure,
    WaterSupplyRecord,
};
use serde::Serialize;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub city_count: usize,
    /// kWh, rounded to two decimals
    pub total_electric_consumption: f64,
    /// Liters, rounded to two decimals
    pub total_water_consumption: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityCharts {
    pub total_consumption: ChartSeries,
    pub average_consumption: ChartSeries,
    pub monthly_consumption: ChartSeries,
    pub area_consumption: ChartSeries,
    pub outage_reasons: ChartSeries,
    pub outage_impact: ChartSeries,
}

impl ElectricityCharts {
    pub fn build(records: &[ElectricityRecord]) -> Result<Self, AggregationError> {
        let consumption = ElectricityMeasure::ConsumptionKwh;
        Ok(Self {
            total_consumption: to_typed_series(
                &sum_by_city(records, consumption)?,
                "Total Consumption",
                ChartType::Bar,
            ),
            average_consumption: to_typed_series(
                &average_by_city(records, consumption)?,
                "Average Consumption",
                ChartType::Bar,
            ),
            monthly_consumption: to_typed_series(
                &monthly_total(records, consumption)?.sorted_by_key(),
                "Monthly Consumption",
                ChartType::Line,
            ),
            area_consumption: to_typed_series(
                &sum_by(records, Dimension::Area, consumption)?,
                "Area Consumption",
                ChartType::Bar,
            ),
            outage_reasons: to_typed_series(
                &count_by_field(records, ElectricityCategory::OutageReason),
                "Outage Reasons",
                ChartType::Pie,
            ),
            outage_impact: to_scatter_series(
                &pair_for_scatter(records, consumption, ElectricityMeasure::OutageDurationMinutes)?,
                "Outage Impact",
            ),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterSupplyCharts {
    pub total_consumption: ChartSeries,
    pub average_consumption: ChartSeries,
    pub supply_comparison: ChartSeries,
    pub reservoir_levels: ChartSeries,
    pub monthly_consumption: ChartSeries,
    pub monthly_rainfall: ChartSeries,
}

impl WaterSupplyCharts {
    pub fn build(records: &[WaterSupplyRecord]) -> Result<Self, AggregationError> {
        let consumption = WaterSupplyMeasure::ConsumptionLiters;
        Ok(Self {
            total_consumption: to_typed_series(
                &sum_by_city(records, consumption)?,
                "Total Consumption",
                ChartType::Bar,
            ),
            average_consumption: to_typed_series(
                &average_by_city(records, consumption)?,
                "Average Consumption",
                ChartType::Bar,
            ),
            supply_comparison: to_comparison_series(&compare_two_measures(
                records,
                Dimension::City,
                consumption,
                WaterSupplyMeasure::ProductionLiters,
            )?),
            reservoir_levels: to_reservoir_average_series(records)?,
            monthly_consumption: to_multi_city_trend_series(&monthly_trend_by_city(records, consumption)?),
            monthly_rainfall: to_multi_city_trend_series(&monthly_trend_by_city(
                records,
                WaterSupplyMeasure::RainfallMm,
            )?),
        })
    }
}

/// Everything the overview page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: Summary,
    pub electricity: ElectricityCharts,
    pub water_supply: WaterSupplyCharts,
}

impl Dashboard {
    /// Build every chart; the first malformed record aborts the build.
    pub fn build(snapshot: &Snapshot) -> Result<Self, AggregationError> {
        let summary = Summary {
            city_count: snapshot.cities.len(),
            total_electric_consumption: round_cents(total(
                &snapshot.electricity,
                ElectricityMeasure::ConsumptionKwh,
            )?),
            total_water_consumption: round_cents(total(
                &snapshot.water_supply,
                WaterSupplyMeasure::ConsumptionLiters,
            )?),
        };
        let dashboard = Self {
            summary,
            electricity: ElectricityCharts::build(&snapshot.electricity)?,
            water_supply: WaterSupplyCharts::build(&snapshot.water_supply)?,
        };
        log::debug!(
            "Built dashboard for {} cities ({} electricity, {} water supply records)",
            dashboard.summary.city_count,
            snapshot.electricity.len(),
            snapshot.water_supply.len()
        );
        Ok(dashboard)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_records::parse_records;
    use serde_json::json;

    fn snapshot() -> Snapshot {
        Snapshot {
            cities: parse_records(
                r#"[
                    {"id": 1, "name": "Hanoi", "country": "Vietnam"},
                    {"id": 2, "name": "Hue", "country": "Vietnam"}
                ]"#,
            )
            .unwrap(),
            electricity: parse_records(
                r#"[
                    {"city": {"id": 1, "name": "Hanoi"}, "area": "Ba Dinh", "consumptionKwh": 10.126,
                     "outageDurationMinutes": 30, "outageReason": "Storm", "date": "2024-02-01"},
                    {"city": {"id": 1, "name": "Hanoi"}, "area": "Ba Dinh", "consumptionKwh": 20,
                     "outageDurationMinutes": 0, "outageReason": "None", "date": "2024-01-15"},
                    {"city": {"id": 2, "name": "Hue"}, "area": "Phu Hoi", "consumptionKwh": 5,
                     "outageDurationMinutes": 12, "outageReason": "Storm", "date": "2024-01-20"}
                ]"#,
            )
            .unwrap(),
            water_supply: parse_records(
                r#"[
                    {"city": {"id": 1, "name": "Hanoi"}, "consumptionLiters": 100, "productionLiters": 120,
                     "reservoirLevelPercentage": 80, "rainfallMm": 3, "date": "2024-01-10"},
                    {"city": {"id": 2, "name": "Hue"}, "consumptionLiters": 50, "productionLiters": 40,
                     "reservoirLevelPercentage": 60, "rainfallMm": 7, "date": "2024-02-10"}
                ]"#,
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_summary() {
        let dashboard = Dashboard::build(&snapshot()).unwrap();
        assert_eq!(dashboard.summary.city_count, 2);
        assert_eq!(dashboard.summary.total_electric_consumption, 35.13);
        assert_eq!(dashboard.summary.total_water_consumption, 150.0);
    }

    #[test]
    fn test_electricity_charts() {
        let charts = Dashboard::build(&snapshot()).unwrap().electricity;
        assert_eq!(charts.total_consumption.labels, vec!["Hanoi", "Hue"]);
        assert_eq!(charts.total_consumption.chart_type, Some(ChartType::Bar));
        assert_eq!(charts.monthly_consumption.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(charts.monthly_consumption.chart_type, Some(ChartType::Line));
        assert_eq!(charts.area_consumption.labels, vec!["Ba Dinh", "Phu Hoi"]);
        assert_eq!(charts.outage_reasons.labels, vec!["Storm", "None"]);
        assert_eq!(charts.outage_reasons.datasets[0].data.values(), Some(&[2.0, 1.0][..]));
        assert_eq!(charts.outage_reasons.chart_type, Some(ChartType::Pie));
        assert_eq!(charts.outage_impact.datasets[0].data.len(), 3);
        assert_eq!(charts.outage_impact.chart_type, Some(ChartType::Scatter));
    }

    #[test]
    fn test_water_supply_charts() {
        let charts = Dashboard::build(&snapshot()).unwrap().water_supply;
        assert_eq!(charts.supply_comparison.datasets.len(), 2);
        assert_eq!(charts.reservoir_levels.datasets[0].data.values(), Some(&[80.0, 60.0][..]));
        assert_eq!(charts.monthly_consumption.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(charts.monthly_consumption.datasets[0].data.values(), Some(&[100.0, 0.0][..]));
        assert_eq!(charts.monthly_rainfall.datasets[1].data.values(), Some(&[0.0, 7.0][..]));
    }

    #[test]
    fn test_empty_snapshot() {
        let dashboard = Dashboard::build(&Snapshot::default()).unwrap();
        assert_eq!(dashboard.summary.city_count, 0);
        assert_eq!(dashboard.summary.total_electric_consumption, 0.0);
        assert!(dashboard.electricity.total_consumption.labels.is_empty());
        assert!(dashboard.water_supply.monthly_rainfall.datasets.is_empty());
    }

    #[test]
    fn test_malformed_record_aborts_build() {
        let mut snapshot = snapshot();
        snapshot.water_supply[1].rainfall_mm = Some(f64::INFINITY);
        assert!(Dashboard::build(&snapshot).is_err());
    }

    #[test]
    fn test_json_keys() {
        let json = Dashboard::build(&snapshot()).unwrap().to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["cityCount"], json!(2));
        assert!(value["electricity"]["outageReasons"]["datasets"].is_array());
        assert!(value["waterSupply"]["supplyComparison"]["labels"].is_array());
    }
}
