//! Chart.js series formatting for City Management System utility data.
//!
//! This crate turns aggregation results from `cms-data` into the
//! `{ labels, datasets }` structure the dashboard's charting library
//! consumes, and assembles every chart of the overview dashboard.
//!
//! # Modules
//!
//! - [`palette`]: the fixed colour palette, cycled by category index
//! - [`models`]: serializable `ChartSeries` / `Dataset` structs (Chart.js field names)
//! - [`formatters`]: pure conversions from aggregations to chart series
//! - [`dashboard`]: the overview dashboard built from one [`cms_records::Snapshot`]
//!
//! # Usage
//!
//! ```rust
//! use cms_chart::formatters::to_labeled_series;
//! use cms_data::sum_by_city;
//! use cms_records::{ElectricityMeasure, ElectricityRecord};
//!
//! let records: Vec<ElectricityRecord> = cms_records::parse_records(
//!     r#"[{"city": {"id": 1, "name": "Hanoi"}, "consumptionKwh": 10}]"#,
//! )
//! .unwrap();
//! let totals = sum_by_city(&records, ElectricityMeasure::ConsumptionKwh).unwrap();
//! let series = to_labeled_series(&totals, "Total Consumption");
//! assert_eq!(series.labels, vec!["Hanoi"]);
//! ```

pub mod dashboard;
pub mod formatters;
pub mod models;
pub mod palette;

pub use dashboard::Dashboard;
pub use models::{ChartSeries, ChartType, Color, Dataset, DatasetData};
pub use palette::Palette;
