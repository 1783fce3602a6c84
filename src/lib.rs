//! story-charts: renders a four-part story document into a Chart.js page.
//!
//! The loader fetches one JSON document, the section renderer writes each
//! section's text into a [`render::Document`] and mounts a themed chart
//! configuration on its canvas. Drawing itself is left to Chart.js.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RenderOutcome, StoryApp, StoryConfig};
pub use error::{LoadFailure, StoryError, StoryResult};
