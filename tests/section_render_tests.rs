use story_charts::api::{StaticStorySource, load_story, render_section, render_story};
use story_charts::core::{ChartData, Dataset, SectionData, SectionId, StoryData};
use story_charts::render::{ChartTheme, ElementKind, PageDocument, build_chart_config};

const STORY_JSON: &str = include_str!("../data/story_data.json");

fn story() -> StoryData {
    load_story(&StaticStorySource::ok(STORY_JSON)).expect("fixture loads")
}

fn page() -> PageDocument {
    PageDocument::new("Story", "app", "chart.js").with_story_targets()
}

#[test]
fn every_section_target_receives_its_content() {
    let story = story();
    let theme = ChartTheme::default();
    let mut doc = page();

    let reports = render_story(&mut doc, &story, &theme);
    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|report| report.is_complete()));

    for (section, data) in story.sections() {
        assert_eq!(doc.text(&section.title_target()), Some(data.title.as_str()));
        assert_eq!(
            doc.text(&section.narrative_target()),
            Some(data.narrative.as_str())
        );
        assert_eq!(
            doc.chart(&section.chart_target()),
            Some(&build_chart_config(&data.chart_data, &theme))
        );
    }
}

#[test]
fn sections_render_in_fixed_order() {
    let reports = render_story(&mut page(), &story(), &ChartTheme::default());
    let order: Vec<SectionId> = reports.iter().map(|report| report.section).collect();
    assert_eq!(
        order,
        vec![
            SectionId::Discovery,
            SectionId::Origin,
            SectionId::Crisis,
            SectionId::Nexus
        ]
    );
}

#[test]
fn missing_canvas_only_skips_that_chart() {
    let story = story();
    let mut doc = page().without_element("nexus-chart");

    let reports = render_story(&mut doc, &story, &ChartTheme::default());

    let nexus = reports[3];
    assert!(nexus.title && nexus.narrative && !nexus.chart);
    assert_eq!(doc.text("nexus-title"), Some("The Nexus"));
    assert_eq!(doc.text("nexus-narrative"), Some(story.nexus.narrative.as_str()));
    assert!(doc.element("nexus-chart").is_none());

    assert!(reports[..3].iter().all(|report| report.is_complete()));
    assert_eq!(doc.mounted_charts().count(), 3);
}

#[test]
fn missing_title_does_not_block_narrative_or_chart() {
    let mut doc = page().without_element("origin-title");
    let report = render_section(
        &mut doc,
        SectionId::Origin,
        &story().origin,
        &ChartTheme::default(),
    );

    assert!(!report.title);
    assert!(report.narrative);
    assert!(report.chart);
    assert!(doc.chart("origin-chart").is_some());
}

#[test]
fn canvas_without_2d_context_gets_no_chart() {
    let mut doc = page().with_element("crisis-chart", ElementKind::Canvas { context_2d: false });
    let reports = render_story(&mut doc, &story(), &ChartTheme::default());

    assert!(!reports[2].chart);
    assert!(doc.chart("crisis-chart").is_none());
    assert_eq!(doc.text("crisis-title"), Some("The Crisis"));
}

#[test]
fn chart_id_on_a_non_canvas_element_is_skipped() {
    let mut doc = page().with_element("discovery-chart", ElementKind::Paragraph);
    let report = render_section(
        &mut doc,
        SectionId::Discovery,
        &story().discovery,
        &ChartTheme::default(),
    );
    assert!(!report.chart);
    assert!(doc.chart("discovery-chart").is_none());
}

#[test]
fn empty_document_renders_nothing_without_error() {
    let mut doc = PageDocument::new("Story", "app", "chart.js");
    let reports = render_story(&mut doc, &story(), &ChartTheme::default());
    assert!(
        reports
            .iter()
            .all(|report| !report.title && !report.narrative && !report.chart)
    );
}

#[test]
fn markup_in_text_is_stored_verbatim() {
    let data = SectionData {
        title: "<b>Bold</b> & \"quoted\"".to_owned(),
        narrative: "<script>alert(1)</script>".to_owned(),
        chart_data: ChartData::new("bar")
            .with_labels(["a"])
            .with_dataset(Dataset::new("d", vec![1.0])),
    };
    let mut doc = page();
    render_section(&mut doc, SectionId::Discovery, &data, &ChartTheme::default());

    assert_eq!(doc.text("discovery-title"), Some("<b>Bold</b> & \"quoted\""));
    assert_eq!(
        doc.text("discovery-narrative"),
        Some("<script>alert(1)</script>")
    );
}
