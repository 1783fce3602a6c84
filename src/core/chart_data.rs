use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::serde_lenient::null_as_default;

/// Library-agnostic description of one chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub chart_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    #[must_use]
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        ChartKind::from_type(&self.chart_type)
    }

    /// Datasets whose point count differs from the label count.
    pub fn mismatched_datasets(&self) -> impl Iterator<Item = &Dataset> {
        let labels_len = self.labels.len();
        self.datasets
            .iter()
            .filter(move |dataset| dataset.data.len() != labels_len)
    }
}

/// Option family a chart type needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Two-axis charts (`bar`, `line`, and every type not listed below).
    Cartesian,
    /// `radar`: a single radial axis.
    Radar,
    /// `doughnut`: no axes.
    Doughnut,
}

impl ChartKind {
    /// Classifies a chart type tag. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_type(chart_type: &str) -> Self {
        match chart_type {
            "radar" => Self::Radar,
            "doughnut" => Self::Doughnut,
            _ => Self::Cartesian,
        }
    }
}

/// A single color for the whole dataset or one color per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for ColorSpec {
    fn from(value: Vec<String>) -> Self {
        Self::PerPoint(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// `None` points serialize as `null`, which Chart.js draws as a gap.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    /// Chart.js dataset keys this crate does not model, passed through as-is.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Dataset {
    #[must_use]
    pub fn new<I, P>(label: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Option<f64>>,
    {
        Self {
            label: label.into(),
            data: data.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }
}
