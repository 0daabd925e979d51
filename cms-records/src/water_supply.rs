use crate::city::CityRef;
use crate::record::{Field, Record};
use serde::{Deserialize, Serialize};

/// A water supply reading as returned by `GET /water-supply`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaterSupplyRecord {
    pub id: Option<i64>,
    pub city: Option<CityRef>,
    pub area: Option<String>,
    pub consumption_liters: Option<f64>,
    pub production_liters: Option<f64>,
    /// Reservoir fill level, 0 to 100
    pub reservoir_level_percentage: Option<f64>,
    pub rainfall_mm: Option<f64>,
    /// ISO date, e.g. "2024-01-15"
    pub date: Option<String>,
}

/// Numeric fields of a [`WaterSupplyRecord`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WaterSupplyMeasure {
    ConsumptionLiters,
    ProductionLiters,
    ReservoirLevelPercentage,
    RainfallMm,
}

impl Field for WaterSupplyMeasure {
    fn field_name(self) -> &'static str {
        match self {
            WaterSupplyMeasure::ConsumptionLiters => "consumptionLiters",
            WaterSupplyMeasure::ProductionLiters => "productionLiters",
            WaterSupplyMeasure::ReservoirLevelPercentage => "reservoirLevelPercentage",
            WaterSupplyMeasure::RainfallMm => "rainfallMm",
        }
    }

    fn label(self) -> &'static str {
        match self {
            WaterSupplyMeasure::ConsumptionLiters => "Consumption (Liters)",
            WaterSupplyMeasure::ProductionLiters => "Production (Liters)",
            WaterSupplyMeasure::ReservoirLevelPercentage => "Reservoir Levels (%)",
            WaterSupplyMeasure::RainfallMm => "Rainfall (mm)",
        }
    }
}

/// String fields of a [`WaterSupplyRecord`] that can be tallied.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WaterSupplyCategory {
    Area,
}

impl Field for WaterSupplyCategory {
    fn field_name(self) -> &'static str {
        "area"
    }

    fn label(self) -> &'static str {
        "Area"
    }
}

impl Record for WaterSupplyRecord {
    type Measure = WaterSupplyMeasure;
    type Category = WaterSupplyCategory;

    fn city(&self) -> Option<&CityRef> {
        self.city.as_ref()
    }

    fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn measure(&self, measure: WaterSupplyMeasure) -> Option<f64> {
        match measure {
            WaterSupplyMeasure::ConsumptionLiters => self.consumption_liters,
            WaterSupplyMeasure::ProductionLiters => self.production_liters,
            WaterSupplyMeasure::ReservoirLevelPercentage => self.reservoir_level_percentage,
            WaterSupplyMeasure::RainfallMm => self.rainfall_mm,
        }
    }

    fn category(&self, category: WaterSupplyCategory) -> Option<&str> {
        match category {
            WaterSupplyCategory::Area => self.area.as_deref(),
        }
    }
}
