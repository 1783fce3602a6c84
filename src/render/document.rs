use crate::render::ChartConfig;

/// Hosting page the story is rendered into.
///
/// Targets are looked up by id. Every method reports whether the target was
/// found; an absent target is never an error.
pub trait Document {
    /// Replaces the text of `id` verbatim, without interpreting markup.
    fn set_text_content(&mut self, id: &str, text: &str) -> bool;

    /// Whether `id` is a canvas with a 2D drawing context.
    fn supports_2d(&self, id: &str) -> bool;

    /// Binds a new chart instance to the canvas `id`.
    fn mount_chart(&mut self, id: &str, config: ChartConfig) -> bool;

    /// Replaces everything inside `id` with a plain-text message.
    fn replace_content(&mut self, id: &str, message: &str) -> bool;
}
