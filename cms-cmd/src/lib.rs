//! Command implementations for the CMS CLI.
//!
//! Provides subcommands that load the city, electricity and water supply
//! collections (from the API or from saved JSON responses) and turn them
//! into dashboard chart JSON or a per-city totals CSV.

use clap::{Args, Subcommand};
use cms_records::api::{ApiClient, DEFAULT_API_URL};
use cms_records::Snapshot;
use log::info;
use std::path::PathBuf;

pub mod dashboard;
pub mod export;

/// Where the record collections come from.
#[derive(Args, Debug, Clone)]
pub struct Source {
    /// Base URL of the CMS API
    #[arg(long, default_value = DEFAULT_API_URL, conflicts_with = "data_dir")]
    pub api_url: String,

    /// Directory holding city.json, electricity.json and water-supply.json
    /// (read instead of calling the API)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl Source {
    pub async fn load(&self) -> anyhow::Result<Snapshot> {
        match &self.data_dir {
            Some(dir) => Snapshot::from_dir(dir),
            None => {
                info!("Fetching records from {}", self.api_url);
                ApiClient::new(&self.api_url)?.fetch_snapshot().await
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Build every dashboard chart and write them as Chart.js JSON
    Dashboard {
        #[command(flatten)]
        source: Source,

        /// Output path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Write per-city electricity and water totals as CSV
    ExportTotals {
        #[command(flatten)]
        source: Source,

        /// Output CSV path
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Dashboard {
            source,
            output,
            pretty,
        } => {
            let snapshot = source.load().await?;
            dashboard::run_dashboard(&snapshot, output.as_deref(), pretty)
        }
        Command::ExportTotals { source, output } => {
            let snapshot = source.load().await?;
            export::run_export_totals(&snapshot, &output)
        }
    }
}
