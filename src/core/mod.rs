pub mod chart_data;
pub mod section;
mod serde_lenient;
pub mod story;

pub use chart_data::{ChartData, ChartKind, ColorSpec, Dataset};
pub use section::SectionId;
pub use story::{SectionData, StoryData};
