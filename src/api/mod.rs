mod section_renderer;
mod story_app;
mod story_config;
mod story_loader;

pub use section_renderer::{SectionReport, render_section, render_story};
pub use story_app::{RenderOutcome, StoryApp};
pub use story_config::{
    DEFAULT_CHART_LIBRARY_URL, DEFAULT_ERROR_MESSAGE, DEFAULT_PAGE_TITLE, DEFAULT_ROOT_ID,
    DEFAULT_STORY_PATH, StoryConfig,
};
#[cfg(feature = "http")]
pub use story_loader::HttpStorySource;
pub use story_loader::{
    FileStorySource, StaticStorySource, StoryResponse, StorySource, load_story,
    source_from_config,
};
