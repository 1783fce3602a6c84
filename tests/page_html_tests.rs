use story_charts::api::{
    DEFAULT_CHART_LIBRARY_URL, DEFAULT_ERROR_MESSAGE, StaticStorySource, StoryResponse,
};
use story_charts::core::{ChartData, SectionData, SectionId};
use story_charts::render::{ChartTheme, Document, PageDocument};
use story_charts::{StoryApp, StoryConfig};

const STORY_JSON: &str = include_str!("../data/story_data.json");

#[test]
fn rendered_page_contains_targets_text_and_charts() {
    let app = StoryApp::new(StoryConfig::new().with_page_title("Signal Story"));
    let (page, _) = app.build_page(&StaticStorySource::ok(STORY_JSON));
    let html = page.to_html().expect("html");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Signal Story</title>"));
    assert!(html.contains("<main id=\"app\">"));
    for section in SectionId::ALL {
        assert!(html.contains(&format!("<section id=\"{}\">", section.name())));
        assert!(html.contains(&format!("<h2 id=\"{}\">", section.title_target())));
        assert!(html.contains(&format!("<p id=\"{}\">", section.narrative_target())));
        assert!(html.contains(&format!("<canvas id=\"{}\">", section.chart_target())));
        assert!(html.contains(&format!("\"canvas\":\"{}\"", section.chart_target())));
    }
    assert!(html.contains("<h2 id=\"discovery-title\">The Signal</h2>"));
    assert!(html.contains(&format!(
        "<script src=\"{DEFAULT_CHART_LIBRARY_URL}\"></script>"
    )));
    assert!(html.contains("new Chart(ctx, mount.config)"));
}

#[test]
fn section_text_is_escaped_not_interpreted() {
    let mut doc = PageDocument::new("Story", "app", "chart.js").with_story_targets();
    let data = SectionData {
        title: "<b>bold</b>".to_owned(),
        narrative: "</script><script>alert(1)</script>".to_owned(),
        chart_data: ChartData::new("bar").with_labels(["</script>"]),
    };
    story_charts::api::render_section(&mut doc, SectionId::Origin, &data, &ChartTheme::default());

    let html = doc.to_html().expect("html");
    assert!(!html.contains("<b>bold</b>"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("<\\/script>"));
}

#[test]
fn failed_load_page_shows_only_the_error() {
    let app = StoryApp::default();
    let (page, _) = app.build_page(&StaticStorySource::new(StoryResponse::new(500, "")));
    let html = page.to_html().expect("html");

    assert!(html.contains(DEFAULT_ERROR_MESSAGE));
    assert!(html.contains("class=\"text-center text-red-500\""));
    assert!(!html.contains("storyCharts"));
    for section in SectionId::ALL {
        assert!(!html.contains(&section.title_target()));
    }
}

#[test]
fn page_without_charts_has_no_mount_script() {
    let doc = PageDocument::new("Empty", "app", "chart.js").with_story_targets();
    let html = doc.to_html().expect("html");
    assert!(!html.contains("storyCharts"));
    assert!(html.contains("<canvas id=\"nexus-chart\"></canvas>"));
}

#[test]
fn plain_text_keeps_spaces_and_quotes_readable() {
    let mut doc = PageDocument::new("Story", "app", "chart.js").with_story_targets();
    doc.set_text_content("crisis-narrative", "Tom & \"Jerry\" met at 5 > 4");

    let html = doc.to_html().expect("html");
    assert!(html.contains("<p id=\"crisis-narrative\">Tom &amp; &quot;Jerry&quot; met at 5 &gt; 4</p>"));
    assert!(!html.contains("&#32;"));
    assert!(!html.contains("&#47;"));
}
