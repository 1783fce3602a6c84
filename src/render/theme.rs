use serde::{Deserialize, Serialize};

/// Colors and fonts applied to every chart on the page.
///
/// Defaults reproduce the dark story theme. Missing fields in a serialized
/// theme fall back to those defaults individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub legend_label_color: String,
    pub tick_color: String,
    pub grid_color: String,
    pub angle_line_color: String,
    pub point_label_color: String,
    pub point_label_size: u32,
    pub tick_backdrop_color: String,
    pub body_font_family: String,
    pub title_font_family: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            legend_label_color: "#9ca3af".to_owned(),
            tick_color: "#6b7280".to_owned(),
            grid_color: "#374151".to_owned(),
            angle_line_color: "#374151".to_owned(),
            point_label_color: "#9ca3af".to_owned(),
            point_label_size: 12,
            tick_backdrop_color: "transparent".to_owned(),
            body_font_family: "'Inter', sans-serif".to_owned(),
            title_font_family: "'Orbitron', sans-serif".to_owned(),
        }
    }
}

impl ChartTheme {
    #[must_use]
    pub fn with_grid_color(mut self, color: impl Into<String>) -> Self {
        self.grid_color = color.into();
        self
    }

    #[must_use]
    pub fn with_tick_color(mut self, color: impl Into<String>) -> Self {
        self.tick_color = color.into();
        self
    }

    #[must_use]
    pub fn with_legend_label_color(mut self, color: impl Into<String>) -> Self {
        self.legend_label_color = color.into();
        self
    }

    #[must_use]
    pub fn with_body_font_family(mut self, family: impl Into<String>) -> Self {
        self.body_font_family = family.into();
        self
    }
}
