use tracing::{trace, warn};

use crate::core::{SectionData, SectionId, StoryData};
use crate::render::{ChartTheme, Document, build_chart_config};

/// Which targets of one section received content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionReport {
    pub section: SectionId,
    pub title: bool,
    pub narrative: bool,
    pub chart: bool,
}

impl SectionReport {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.title && self.narrative && self.chart
    }
}

/// Writes one section into `doc`.
///
/// Each of the three targets is handled independently: a missing title,
/// narrative or chart target is skipped without touching the other two.
pub fn render_section<D: Document + ?Sized>(
    doc: &mut D,
    section: SectionId,
    data: &SectionData,
    theme: &ChartTheme,
) -> SectionReport {
    let title = doc.set_text_content(&section.title_target(), &data.title);
    let narrative = doc.set_text_content(&section.narrative_target(), &data.narrative);

    let chart_target = section.chart_target();
    let chart = if doc.supports_2d(&chart_target) {
        for dataset in data.chart_data.mismatched_datasets() {
            warn!(
                %section,
                dataset = %dataset.label,
                labels = data.chart_data.labels.len(),
                points = dataset.data.len(),
                "dataset length differs from label count"
            );
        }
        let config = build_chart_config(&data.chart_data, theme);
        doc.mount_chart(&chart_target, config)
    } else {
        false
    };

    let report = SectionReport {
        section,
        title,
        narrative,
        chart,
    };
    if !report.is_complete() {
        trace!(?report, "section rendered with missing targets");
    }
    report
}

/// Renders all four sections in their fixed order.
pub fn render_story<D: Document + ?Sized>(
    doc: &mut D,
    story: &StoryData,
    theme: &ChartTheme,
) -> Vec<SectionReport> {
    story
        .sections()
        .map(|(section, data)| render_section(doc, section, data, theme))
        .collect()
}
