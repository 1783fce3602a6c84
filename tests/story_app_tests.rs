use story_charts::api::{
    DEFAULT_ERROR_MESSAGE, StaticStorySource, StoryResponse, StorySource,
};
use story_charts::core::SectionId;
use story_charts::render::{Document, PageDocument};
use story_charts::{LoadFailure, RenderOutcome, StoryApp, StoryConfig, StoryError};

const STORY_JSON: &str = include_str!("../data/story_data.json");

struct UnreachableSource;

impl StorySource for UnreachableSource {
    fn location(&self) -> String {
        "http://unreachable.invalid/data/story_data.json".to_owned()
    }

    fn fetch(&self) -> Result<StoryResponse, LoadFailure> {
        Err(LoadFailure::Transport("dns error".to_owned()))
    }
}

fn assert_no_section_content(page: &PageDocument) {
    for section in SectionId::ALL {
        assert_eq!(page.text(&section.title_target()), Some(""));
        assert_eq!(page.text(&section.narrative_target()), Some(""));
        assert!(page.chart(&section.chart_target()).is_none());
    }
}

#[test]
fn successful_load_renders_every_section() {
    let app = StoryApp::new(StoryConfig::new());
    let (page, outcome) = app.build_page(&StaticStorySource::ok(STORY_JSON));

    match outcome {
        RenderOutcome::Rendered(reports) => {
            assert_eq!(reports.len(), 4);
            assert!(reports.iter().all(|report| report.is_complete()));
        }
        RenderOutcome::Failed(err) => panic!("unexpected failure: {err}"),
    }
    assert_eq!(page.root_message(), None);
    assert_eq!(page.text("discovery-title"), Some("The Signal"));
    assert_eq!(page.mounted_charts().count(), 4);
}

#[test]
fn non_success_status_shows_only_the_error_message() {
    let app = StoryApp::default();
    let source = StaticStorySource::new(StoryResponse::new(404, "not found"));
    let (page, outcome) = app.build_page(&source);

    assert!(!outcome.is_rendered());
    assert!(matches!(
        outcome.error(),
        Some(StoryError::Unavailable(LoadFailure::Status { status: 404 }))
    ));
    assert_eq!(page.root_message(), Some(DEFAULT_ERROR_MESSAGE));
    assert_no_section_content(&page);
}

#[test]
fn malformed_json_takes_the_same_error_path() {
    let app = StoryApp::default();
    let (page, outcome) = app.build_page(&StaticStorySource::ok("not json at all"));

    assert!(matches!(
        outcome,
        RenderOutcome::Failed(StoryError::Unavailable(LoadFailure::Malformed(_)))
    ));
    assert_eq!(page.root_message(), Some(DEFAULT_ERROR_MESSAGE));
    assert_no_section_content(&page);
}

#[test]
fn transport_failure_takes_the_same_error_path() {
    let app = StoryApp::default();
    let (page, outcome) = app.build_page(&UnreachableSource);

    assert!(outcome.error().is_some());
    assert_eq!(page.root_message(), Some(DEFAULT_ERROR_MESSAGE));
}

#[test]
fn configured_error_message_and_root_are_used() {
    let config = StoryConfig::new().with_error_message("Story offline.");
    let app = StoryApp::new(config);
    let mut page = PageDocument::new("Story", "app", "chart.js").with_story_targets();

    app.run(&StaticStorySource::new(StoryResponse::new(500, "")), &mut page);
    assert_eq!(page.root_message(), Some("Story offline."));
}

#[test]
fn run_works_through_a_trait_object() {
    let app = StoryApp::default();
    let mut page = app.config().page_document();
    let doc: &mut dyn Document = &mut page;

    let outcome = app.run(&StaticStorySource::ok(STORY_JSON), doc);
    assert!(outcome.is_rendered());
    assert_eq!(page.text("nexus-title"), Some("The Nexus"));
}

#[test]
fn null_fields_render_as_empty_text_instead_of_failing() {
    let body = r#"{
        "discovery": {"title": null, "narrative": null, "chartData": {"type": "bar", "labels": ["a", "b"], "datasets": [{"label": "d", "data": [null, 2]}]}},
        "origin": {"title": "Origin"}
    }"#;
    let app = StoryApp::default();
    let (page, outcome) = app.build_page(&StaticStorySource::ok(body));

    assert!(outcome.is_rendered());
    assert_eq!(page.root_message(), None);
    assert_eq!(page.text("discovery-title"), Some(""));
    assert_eq!(page.text("origin-title"), Some("Origin"));
    let chart = page.chart("discovery-chart").expect("chart mounted");
    assert_eq!(chart.data.datasets[0].data, vec![None, Some(2.0)]);
}
