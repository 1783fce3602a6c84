use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::render::{ChartTheme, PageDocument};

pub const DEFAULT_STORY_PATH: &str = "data/story_data.json";
pub const DEFAULT_CHART_LIBRARY_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";
pub const DEFAULT_PAGE_TITLE: &str = "Story";
pub const DEFAULT_ROOT_ID: &str = "app";
pub const DEFAULT_ERROR_MESSAGE: &str = "Error loading story data. Please try again later.";

/// Page and loader setup.
///
/// This type is serializable so hosts can keep it next to the story document;
/// every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Location of the story document, relative to `base_url` when set,
    /// otherwise a filesystem path.
    #[serde(default = "default_story_path")]
    pub story_path: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_chart_library_url")]
    pub chart_library_url: String,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    /// Container replaced by `error_message` when the story cannot be loaded.
    #[serde(default = "default_root_id")]
    pub root_id: String,
    #[serde(default = "default_error_message")]
    pub error_message: String,
    #[serde(default)]
    pub theme: ChartTheme,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            story_path: default_story_path(),
            base_url: None,
            chart_library_url: default_chart_library_url(),
            page_title: default_page_title(),
            root_id: default_root_id(),
            error_message: default_error_message(),
            theme: ChartTheme::default(),
        }
    }

    pub fn from_json_str(input: &str) -> StoryResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StoryError::InvalidConfig(format!("failed to parse story config: {e}")))
    }

    pub fn to_json_pretty(&self) -> StoryResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StoryError::InvalidConfig(format!("failed to serialize story config: {e}"))
        })
    }

    #[must_use]
    pub fn with_story_path(mut self, story_path: impl Into<String>) -> Self {
        self.story_path = story_path.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_chart_library_url(mut self, url: impl Into<String>) -> Self {
        self.chart_library_url = url.into();
        self
    }

    #[must_use]
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Empty page carrying every section target.
    #[must_use]
    pub fn page_document(&self) -> PageDocument {
        PageDocument::new(&self.page_title, &self.root_id, &self.chart_library_url)
            .with_story_targets()
    }
}

fn default_story_path() -> String {
    DEFAULT_STORY_PATH.to_owned()
}

fn default_chart_library_url() -> String {
    DEFAULT_CHART_LIBRARY_URL.to_owned()
}

fn default_page_title() -> String {
    DEFAULT_PAGE_TITLE.to_owned()
}

fn default_root_id() -> String {
    DEFAULT_ROOT_ID.to_owned()
}

fn default_error_message() -> String {
    DEFAULT_ERROR_MESSAGE.to_owned()
}
