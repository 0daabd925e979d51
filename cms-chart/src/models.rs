//! Chart series model structs.
//!
//! Field names follow Chart.js (`labels`, `datasets`, `backgroundColor`,
//! `borderColor`, `borderWidth`, ...) so the serialized JSON can be handed
//! to the renderer unchanged. Optional fields are omitted when unset.

use cms_data::ScatterPoint;
use serde::Serialize;

/// Chart kind hint carried at the top level of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Scatter,
}

/// A colour setting: one colour for the whole dataset, or one per item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Single(String),
    PerItem(Vec<String>),
}

impl Color {
    /// Colour used for the item at `index`.
    pub fn at(&self, index: usize) -> Option<&str> {
        match self {
            Color::Single(color) => Some(color.as_str()),
            Color::PerItem(colors) => colors.get(index).map(String::as_str),
        }
    }
}

/// Values of a dataset: plain numbers aligned with the labels, or x/y points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetData {
    Values(Vec<f64>),
    Points(Vec<ScatterPoint>),
}

impl DatasetData {
    pub fn len(&self) -> usize {
        match self {
            DatasetData::Values(values) => values.len(),
            DatasetData::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Option<&[f64]> {
        match self {
            DatasetData::Values(values) => Some(values),
            DatasetData::Points(_) => None,
        }
    }
}

/// One labeled series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: DatasetData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    pub border_color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

impl Dataset {
    /// A dataset with only the required fields set.
    pub fn new(label: &str, data: DatasetData, border_color: Color) -> Self {
        Self {
            label: label.to_string(),
            data,
            background_color: None,
            border_color,
            border_width: None,
            fill: None,
            tension: None,
            point_radius: None,
        }
    }
}

/// Category axis plus datasets, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            labels,
            datasets,
            chart_type: None,
        }
    }

    pub fn with_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = Some(chart_type);
        self
    }
}
