//! Async client for the read-only list endpoints of the CMS API.

use crate::city::City;
use crate::electricity::ElectricityRecord;
use crate::record::RecordType;
use crate::snapshot::{parse_records, Snapshot};
use crate::water_supply::WaterSupplyRecord;
use anyhow::{bail, Context};
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URL of a locally running API server.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TRIES: u32 = 3;

/// Thin wrapper around a `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the list endpoint for a record type, e.g. `{base}/water-supply`.
    pub fn url_for(&self, record_type: RecordType) -> String {
        format!("{}/{}", self.base_url, record_type.path())
    }

    /// `GET {base}/{record_type}` and decode the JSON array.
    ///
    /// Transport failures and non-2xx responses are retried with
    /// exponential backoff; a body that does not decode is not.
    pub async fn fetch_all<T: DeserializeOwned>(&self, record_type: RecordType) -> anyhow::Result<Vec<T>> {
        let url = self.url_for(record_type);
        let mut sleep_millis: u64 = 500;
        let mut last_error = String::new();

        for attempt in 1..=MAX_TRIES {
            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    let body = response
                        .text()
                        .await
                        .with_context(|| format!("failed to read body from {}", url))?;
                    let records: Vec<T> =
                        parse_records(&body).with_context(|| format!("failed to decode {}", url))?;
                    info!("Fetched {} {} records", records.len(), record_type);
                    return Ok(records);
                }
                Ok(response) => {
                    last_error = format!("bad response status {}", response.status());
                }
                Err(e) => {
                    last_error = e.to_string();
                }
            }
            warn!("Attempt {}/{}: GET {} failed: {}", attempt, MAX_TRIES, url, last_error);
            if attempt < MAX_TRIES {
                tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
                sleep_millis *= 2;
            }
        }
        bail!("GET {} failed after {} attempts: {}", url, MAX_TRIES, last_error)
    }

    pub async fn fetch_cities(&self) -> anyhow::Result<Vec<City>> {
        self.fetch_all(RecordType::City).await
    }

    pub async fn fetch_electricity(&self) -> anyhow::Result<Vec<ElectricityRecord>> {
        self.fetch_all(RecordType::Electricity).await
    }

    pub async fn fetch_water_supply(&self) -> anyhow::Result<Vec<WaterSupplyRecord>> {
        self.fetch_all(RecordType::WaterSupply).await
    }

    /// Fetch all three collections concurrently.
    pub async fn fetch_snapshot(&self) -> anyhow::Result<Snapshot> {
        let (cities, electricity, water_supply) = tokio::try_join!(
            self.fetch_cities(),
            self.fetch_electricity(),
            self.fetch_water_supply()
        )?;
        Ok(Snapshot {
            cities,
            electricity,
            water_supply,
        })
    }
}
