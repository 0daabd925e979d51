//! Per-city totals CSV export.

use anyhow::Context;
use cms_data::{compare_two_measures, sum_by_city, Dimension};
use cms_records::{ElectricityMeasure, Snapshot, WaterSupplyMeasure};
use log::info;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// One CSV row: every total for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityTotals {
    pub city: String,
    pub electricity_kwh: f64,
    pub water_consumption_liters: f64,
    pub water_production_liters: f64,
}

/// Totals per city, cities in order of first appearance (electricity
/// records first, then water supply records).
pub fn city_totals(snapshot: &Snapshot) -> anyhow::Result<Vec<CityTotals>> {
    let electricity = sum_by_city(&snapshot.electricity, ElectricityMeasure::ConsumptionKwh)?;
    let water = compare_two_measures(
        &snapshot.water_supply,
        Dimension::City,
        WaterSupplyMeasure::ConsumptionLiters,
        WaterSupplyMeasure::ProductionLiters,
    )?;

    let mut rows: Vec<CityTotals> = electricity
        .iter()
        .map(|(city, kwh)| CityTotals {
            city: city.to_string(),
            electricity_kwh: kwh,
            water_consumption_liters: 0.0,
            water_production_liters: 0.0,
        })
        .collect();
    let mut positions: HashMap<String, usize> = rows
        .iter()
        .enumerate()
        .map(|(position, row)| (row.city.clone(), position))
        .collect();

    for group in water.groups {
        match positions.get(&group.group).copied() {
            Some(position) => {
                rows[position].water_consumption_liters = group.first;
                rows[position].water_production_liters = group.second;
            }
            None => {
                positions.insert(group.group.clone(), rows.len());
                rows.push(CityTotals {
                    city: group.group,
                    electricity_kwh: 0.0,
                    water_consumption_liters: group.first,
                    water_production_liters: group.second,
                });
            }
        }
    }
    Ok(rows)
}

/// Write [`city_totals`] to `output` as CSV with a header row.
pub fn run_export_totals(snapshot: &Snapshot, output: &Path) -> anyhow::Result<()> {
    let rows = city_totals(snapshot).context("failed to aggregate records")?;
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Totals for {} cities written to {}", rows.len(), output.display());
    Ok(())
}
