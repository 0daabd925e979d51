//! Decoding of API list responses.
//!
//! Every list endpoint returns a JSON array. The same payloads can be saved
//! to disk as `city.json`, `electricity.json` and `water-supply.json` and
//! loaded back with [`Snapshot::from_dir`].

use crate::city::City;
use crate::electricity::ElectricityRecord;
use crate::record::RecordType;
use crate::water_supply::WaterSupplyRecord;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Decode a JSON array of records.
///
/// Elements are decoded one at a time so the error names the offending
/// index, e.g. a measure sent as a string instead of a number.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> anyhow::Result<Vec<T>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(json).context("response is not a JSON array")?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).with_context(|| format!("malformed record at index {}", index))
        })
        .collect()
}

/// One consistent copy of the three record collections the dashboard reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub cities: Vec<City>,
    pub electricity: Vec<ElectricityRecord>,
    pub water_supply: Vec<WaterSupplyRecord>,
}

impl Snapshot {
    /// Load a snapshot from a directory of saved list responses.
    pub fn from_dir(dir: &Path) -> anyhow::Result<Self> {
        let snapshot = Self {
            cities: read_collection(dir, RecordType::City)?,
            electricity: read_collection(dir, RecordType::Electricity)?,
            water_supply: read_collection(dir, RecordType::WaterSupply)?,
        };
        log::info!(
            "Loaded {} cities, {} electricity and {} water supply records from {}",
            snapshot.cities.len(),
            snapshot.electricity.len(),
            snapshot.water_supply.len(),
            dir.display()
        );
        Ok(snapshot)
    }
}

fn read_collection<T: DeserializeOwned>(dir: &Path, record_type: RecordType) -> anyhow::Result<Vec<T>> {
    let path = dir.join(record_type.file_name());
    let body = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_records(&body).with_context(|| format!("failed to decode {}", path.display()))
}
