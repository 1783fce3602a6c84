use serde::{Deserialize, Serialize};

use crate::core::{ChartData, Dataset};
use crate::render::{ChartOptions, ChartTheme};

/// Complete configuration handed to the charting library for one canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartConfigData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Translates a chart description into a themed Chart.js configuration.
///
/// Labels and datasets are passed through untouched, including length
/// mismatches between them.
#[must_use]
pub fn build_chart_config(chart: &ChartData, theme: &ChartTheme) -> ChartConfig {
    ChartConfig {
        chart_type: chart.chart_type.clone(),
        data: ChartConfigData {
            labels: chart.labels.clone(),
            datasets: chart.datasets.clone(),
        },
        options: ChartOptions::for_kind(chart.kind(), theme),
    }
}
