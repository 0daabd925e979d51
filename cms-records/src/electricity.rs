use crate::city::CityRef;
use crate::record::{Field, Record};
use serde::{Deserialize, Serialize};

/// An electricity reading as returned by `GET /electricity`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElectricityRecord {
    pub id: Option<i64>,
    pub city: Option<CityRef>,
    pub area: Option<String>,
    /// Consumption in kilowatt-hours
    pub consumption_kwh: Option<f64>,
    pub outage_duration_minutes: Option<f64>,
    /// Free-form reason; the server uses the literal "None" when there was no outage
    pub outage_reason: Option<String>,
    /// ISO date, e.g. "2024-01-15"
    pub date: Option<String>,
}

/// Numeric fields of an [`ElectricityRecord`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ElectricityMeasure {
    ConsumptionKwh,
    OutageDurationMinutes,
}

impl Field for ElectricityMeasure {
    fn field_name(self) -> &'static str {
        match self {
            ElectricityMeasure::ConsumptionKwh => "consumptionKwh",
            ElectricityMeasure::OutageDurationMinutes => "outageDurationMinutes",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ElectricityMeasure::ConsumptionKwh => "Consumption (kWh)",
            ElectricityMeasure::OutageDurationMinutes => "Outage Duration (minutes)",
        }
    }
}

/// String fields of an [`ElectricityRecord`] that can be tallied.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ElectricityCategory {
    OutageReason,
    Area,
}

impl Field for ElectricityCategory {
    fn field_name(self) -> &'static str {
        match self {
            ElectricityCategory::OutageReason => "outageReason",
            ElectricityCategory::Area => "area",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ElectricityCategory::OutageReason => "Outage Reason",
            ElectricityCategory::Area => "Area",
        }
    }
}

impl Record for ElectricityRecord {
    type Measure = ElectricityMeasure;
    type Category = ElectricityCategory;

    fn city(&self) -> Option<&CityRef> {
        self.city.as_ref()
    }

    fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn measure(&self, measure: ElectricityMeasure) -> Option<f64> {
        match measure {
            ElectricityMeasure::ConsumptionKwh => self.consumption_kwh,
            ElectricityMeasure::OutageDurationMinutes => self.outage_duration_minutes,
        }
    }

    fn category(&self, category: ElectricityCategory) -> Option<&str> {
        match category {
            ElectricityCategory::OutageReason => self.outage_reason.as_deref(),
            ElectricityCategory::Area => self.area.as_deref(),
        }
    }
}
