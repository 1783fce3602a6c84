//! Chart.js option blocks.
//!
//! Every chart starts from the same plugin styling. The axis block is chosen
//! per [`ChartKind`] by one pure function per variant.

use serde::{Deserialize, Serialize};

use crate::core::ChartKind;
use crate::render::ChartTheme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScaleOptions>,
}

impl ChartOptions {
    /// Baseline plugin styling plus the axis block for `kind`.
    #[must_use]
    pub fn for_kind(kind: ChartKind, theme: &ChartTheme) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            plugins: PluginOptions::themed(theme),
            scales: scales_for_kind(kind, theme),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

impl PluginOptions {
    #[must_use]
    pub fn themed(theme: &ChartTheme) -> Self {
        Self {
            legend: LegendOptions {
                labels: LegendLabels {
                    color: theme.legend_label_color.clone(),
                    font: FontSpec::family(&theme.body_font_family),
                },
            },
            tooltip: TooltipOptions {
                title_font: FontSpec::family(&theme.title_font_family),
                body_font: FontSpec::family(&theme.body_font_family),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: String,
    pub font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub title_font: FontSpec,
    pub body_font: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl FontSpec {
    #[must_use]
    pub fn family(family: &str) -> Self {
        Self {
            family: family.to_owned(),
            size: None,
        }
    }

    #[must_use]
    pub fn sized(family: &str, size: u32) -> Self {
        Self {
            family: family.to_owned(),
            size: Some(size),
        }
    }
}

/// Axis block of a chart: either the x/y pair or the single radial axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleOptions {
    Cartesian { x: CartesianAxis, y: CartesianAxis },
    Radial { r: RadialAxis },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianAxis {
    pub ticks: TickOptions,
    pub grid: LineOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialAxis {
    pub angle_lines: LineOptions,
    pub grid: LineOptions,
    pub point_labels: PointLabelOptions,
    pub ticks: TickOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOptions {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLabelOptions {
    pub color: String,
    pub font: FontSpec,
}

#[must_use]
pub fn scales_for_kind(kind: ChartKind, theme: &ChartTheme) -> Option<ScaleOptions> {
    match kind {
        ChartKind::Cartesian => Some(cartesian_scales(theme)),
        ChartKind::Radar => Some(radial_scales(theme)),
        ChartKind::Doughnut => None,
    }
}

#[must_use]
pub fn cartesian_scales(theme: &ChartTheme) -> ScaleOptions {
    let axis = CartesianAxis {
        ticks: TickOptions {
            color: theme.tick_color.clone(),
            font: Some(FontSpec::family(&theme.body_font_family)),
            backdrop_color: None,
        },
        grid: LineOptions {
            color: theme.grid_color.clone(),
        },
    };
    ScaleOptions::Cartesian {
        x: axis.clone(),
        y: axis,
    }
}

#[must_use]
pub fn radial_scales(theme: &ChartTheme) -> ScaleOptions {
    ScaleOptions::Radial {
        r: RadialAxis {
            angle_lines: LineOptions {
                color: theme.angle_line_color.clone(),
            },
            grid: LineOptions {
                color: theme.grid_color.clone(),
            },
            point_labels: PointLabelOptions {
                color: theme.point_label_color.clone(),
                font: FontSpec::sized(&theme.body_font_family, theme.point_label_size),
            },
            ticks: TickOptions {
                color: theme.tick_color.clone(),
                font: None,
                backdrop_color: Some(theme.tick_backdrop_color.clone()),
            },
        },
    }
}
