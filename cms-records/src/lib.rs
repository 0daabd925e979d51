//! Record models for the City Management System API.
//!
//! This crate provides:
//! - `city`: cities and the city references embedded in records
//! - `electricity` / `water_supply`: the two reading types and their typed fields
//! - `record`: the `Record` accessor trait used by the aggregation layer
//! - `snapshot`: decoding JSON list responses and loading them from disk
//! - `api` (feature `api`): async client for the list endpoints

pub mod city;
pub mod electricity;
pub mod record;
pub mod snapshot;
pub mod water_supply;

#[cfg(feature = "api")]
pub mod api;

pub use city::{City, CityRef};
pub use electricity::{ElectricityCategory, ElectricityMeasure, ElectricityRecord};
pub use record::{Field, Record, RecordType};
pub use snapshot::{parse_records, Snapshot};
pub use water_supply::{WaterSupplyCategory, WaterSupplyMeasure, WaterSupplyRecord};
