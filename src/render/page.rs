use indexmap::IndexMap;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use tracing::debug;

use crate::core::SectionId;
use crate::error::{StoryError, StoryResult};
use crate::render::{ChartConfig, Document};

const ERROR_CLASS: &str = "text-center text-red-500";

const PAGE_STYLE: &str = "
  body { margin: 0; background: #030712; color: #e5e7eb; font-family: 'Inter', sans-serif; }
  main { max-width: 960px; margin: 0 auto; padding: 32px 16px; }
  section { margin-bottom: 64px; }
  h2 { font-family: 'Orbitron', sans-serif; color: #22d3ee; }
  p { line-height: 1.6; color: #9ca3af; }
  .text-center { text-align: center; }
  .text-red-500 { color: #ef4444; }
";

const MOUNT_SCRIPT: &str = "for (const mount of storyCharts) {
  const canvas = document.getElementById(mount.canvas);
  const ctx = canvas && canvas.getContext('2d');
  if (ctx) {
    new Chart(ctx, mount.config);
  }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading,
    Paragraph,
    /// `context_2d` is false for canvases that cannot provide a 2D context.
    Canvas { context_2d: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    pub kind: ElementKind,
    pub section: Option<SectionId>,
    pub text: String,
    pub chart: Option<ChartConfig>,
}

impl PageElement {
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            section: None,
            text: String::new(),
            chart: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChartMount<'a> {
    canvas: &'a str,
    config: &'a ChartConfig,
}

/// In-memory page that serializes to a self-contained HTML document.
///
/// Elements keep insertion order, which is also their order in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    title: String,
    root_id: String,
    chart_library_url: String,
    elements: IndexMap<String, PageElement>,
    root_message: Option<String>,
}

impl PageDocument {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        root_id: impl Into<String>,
        chart_library_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            root_id: root_id.into(),
            chart_library_url: chart_library_url.into(),
            elements: IndexMap::new(),
            root_message: None,
        }
    }

    /// Adds the title, narrative and chart targets of all four sections.
    #[must_use]
    pub fn with_story_targets(mut self) -> Self {
        for section in SectionId::ALL {
            for (id, kind) in [
                (section.title_target(), ElementKind::Heading),
                (section.narrative_target(), ElementKind::Paragraph),
                (
                    section.chart_target(),
                    ElementKind::Canvas { context_2d: true },
                ),
            ] {
                let mut element = PageElement::new(kind);
                element.section = Some(section);
                self.elements.insert(id, element);
            }
        }
        self
    }

    /// Adds `id`, or changes its kind in place when it already exists.
    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>, kind: ElementKind) -> Self {
        let id = id.into();
        match self.elements.get_mut(&id) {
            Some(element) => element.kind = kind,
            None => {
                self.elements.insert(id, PageElement::new(kind));
            }
        }
        self
    }

    #[must_use]
    pub fn without_element(mut self, id: &str) -> Self {
        self.elements.shift_remove(id);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements.get(id)
    }

    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|element| element.text.as_str())
    }

    #[must_use]
    pub fn chart(&self, id: &str) -> Option<&ChartConfig> {
        self.elements.get(id).and_then(|element| element.chart.as_ref())
    }

    /// Message that replaced the root container, if any.
    #[must_use]
    pub fn root_message(&self) -> Option<&str> {
        self.root_message.as_deref()
    }

    pub fn mounted_charts(&self) -> impl Iterator<Item = (&str, &ChartConfig)> {
        self.elements
            .iter()
            .filter_map(|(id, element)| element.chart.as_ref().map(|chart| (id.as_str(), chart)))
    }

    /// Serializes the page, including one Chart.js instantiation per mounted canvas.
    pub fn to_html(&self) -> StoryResult<String> {
        let mount_script = match &self.root_message {
            Some(_) => None,
            None => self.mount_script()?,
        };

        let page = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    script src=(self.chart_library_url) {}
                    style { (PreEscaped(PAGE_STYLE)) }
                }
                body {
                    main id=(self.root_id) {
                        @match &self.root_message {
                            Some(message) => {
                                div class=(ERROR_CLASS) { (message) }
                            }
                            None => {
                                (self.render_elements())
                            }
                        }
                    }
                    @if let Some(script) = mount_script {
                        script { (PreEscaped(script)) }
                    }
                }
            }
        };
        Ok(page.into_string())
    }

    fn mount_script(&self) -> StoryResult<Option<String>> {
        let mounts: Vec<ChartMount<'_>> = self
            .mounted_charts()
            .map(|(canvas, config)| ChartMount { canvas, config })
            .collect();
        debug!(charts = mounts.len(), "serialized story page");
        if mounts.is_empty() {
            return Ok(None);
        }
        let json = serde_json::to_string(&mounts).map_err(|e| {
            StoryError::PageSerialization(format!("failed to serialize charts: {e}"))
        })?;
        Ok(Some(format!(
            "\nconst storyCharts = {};\n{MOUNT_SCRIPT}",
            script_safe(&json)
        )))
    }

    /// Elements in order, consecutive elements of one section wrapped in `<section>`.
    fn render_elements(&self) -> Markup {
        let mut groups: Vec<(Option<SectionId>, Vec<(&str, &PageElement)>)> = Vec::new();
        for (id, element) in &self.elements {
            match groups.last_mut() {
                Some((section, members)) if *section == element.section => {
                    members.push((id.as_str(), element));
                }
                _ => groups.push((element.section, vec![(id.as_str(), element)])),
            }
        }

        html! {
            @for (section, members) in &groups {
                @if let Some(section) = section {
                    section id=(section.name()) {
                        @for (id, element) in members {
                            (render_element(id, element))
                        }
                    }
                } @else {
                    @for (id, element) in members {
                        (render_element(id, element))
                    }
                }
            }
        }
    }
}

fn render_element(id: &str, element: &PageElement) -> Markup {
    html! {
        @match element.kind {
            ElementKind::Heading => {
                h2 id=(id) { (element.text) }
            }
            ElementKind::Paragraph => {
                p id=(id) { (element.text) }
            }
            ElementKind::Canvas { .. } => {
                canvas id=(id) { (element.text) }
            }
        }
    }
}

impl Document for PageDocument {
    fn set_text_content(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.text = text.to_owned();
                true
            }
            None => false,
        }
    }

    fn supports_2d(&self, id: &str) -> bool {
        matches!(
            self.elements.get(id).map(|element| element.kind),
            Some(ElementKind::Canvas { context_2d: true })
        )
    }

    fn mount_chart(&mut self, id: &str, config: ChartConfig) -> bool {
        if !self.supports_2d(id) {
            return false;
        }
        match self.elements.get_mut(id) {
            Some(element) => {
                element.chart = Some(config);
                true
            }
            None => false,
        }
    }

    fn replace_content(&mut self, id: &str, message: &str) -> bool {
        if id == self.root_id {
            self.root_message = Some(message.to_owned());
            return true;
        }
        match self.elements.get_mut(id) {
            Some(element) => {
                element.text = message.to_owned();
                element.chart = None;
                true
            }
            None => false,
        }
    }
}

/// Keeps embedded JSON from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}
