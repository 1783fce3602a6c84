//! Chart configuration assembly and the presentation surface.

mod config;
mod document;
mod options;
mod page;
mod theme;

pub use config::{ChartConfig, ChartConfigData, build_chart_config};
pub use document::Document;
pub use options::{
    CartesianAxis, ChartOptions, FontSpec, LegendLabels, LegendOptions, LineOptions,
    PluginOptions, PointLabelOptions, RadialAxis, ScaleOptions, TickOptions, TooltipOptions,
    cartesian_scales, radial_scales, scales_for_kind,
};
pub use page::{ElementKind, PageDocument, PageElement};
pub use theme::ChartTheme;
