use tracing::{error, info};

use crate::error::StoryError;
use crate::render::{Document, PageDocument};

use super::{SectionReport, StoryConfig, StorySource, load_story, render_story};

/// Result of one page lifecycle.
#[derive(Debug)]
pub enum RenderOutcome {
    /// All four sections were rendered, in order.
    Rendered(Vec<SectionReport>),
    /// Loading failed; the root container shows the error message instead.
    Failed(StoryError),
}

impl RenderOutcome {
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&StoryError> {
        match self {
            Self::Rendered(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// Loads the story once and renders it, or the error message, into a document.
#[derive(Debug, Clone, Default)]
pub struct StoryApp {
    config: StoryConfig,
}

impl StoryApp {
    #[must_use]
    pub fn new(config: StoryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Runs one lifecycle against `doc`.
    ///
    /// Nothing is written to the section targets unless the load succeeds.
    pub fn run<D: Document + ?Sized>(
        &self,
        source: &dyn StorySource,
        doc: &mut D,
    ) -> RenderOutcome {
        match load_story(source) {
            Ok(story) => {
                let reports = render_story(doc, &story, &self.config.theme);
                info!(
                    location = %source.location(),
                    charts = reports.iter().filter(|report| report.chart).count(),
                    "story rendered"
                );
                RenderOutcome::Rendered(reports)
            }
            Err(err) => {
                error!(
                    location = %source.location(),
                    error = %err,
                    cause = ?err.cause(),
                    "failed to load story data"
                );
                doc.replace_content(&self.config.root_id, &self.config.error_message);
                RenderOutcome::Failed(err)
            }
        }
    }

    /// Runs one lifecycle against a fresh page carrying every section target.
    pub fn build_page(&self, source: &dyn StorySource) -> (PageDocument, RenderOutcome) {
        let mut page = self.config.page_document();
        let outcome = self.run(source, &mut page);
        (page, outcome)
    }
}
