use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::core::StoryData;
use crate::error::{LoadFailure, StoryResult};

use super::StoryConfig;

/// Raw answer of a story source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryResponse {
    pub status: u16,
    pub body: String,
}

impl StoryResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Where the story document comes from.
///
/// `fetch` is called exactly once per load and must not retry.
pub trait StorySource {
    /// Human-readable location used in diagnostics.
    fn location(&self) -> String;

    fn fetch(&self) -> Result<StoryResponse, LoadFailure>;
}

/// Fetches and parses the story document.
///
/// Transport failures, non-success statuses and unparsable bodies all end up
/// as [`crate::error::StoryError::Unavailable`].
pub fn load_story(source: &dyn StorySource) -> StoryResult<StoryData> {
    let location = source.location();
    debug!(%location, "fetching story data");

    let response = source.fetch()?;
    if !response.is_success() {
        return Err(LoadFailure::Status {
            status: response.status,
        }
        .into());
    }

    let story: StoryData = serde_json::from_str(&response.body)
        .map_err(|e| LoadFailure::Malformed(e.to_string()))?;
    debug!(%location, bytes = response.body.len(), "story data loaded");
    Ok(story)
}

/// Source matching `config`: HTTP when a base URL is set, the filesystem otherwise.
pub fn source_from_config(config: &StoryConfig) -> StoryResult<Box<dyn StorySource>> {
    match &config.base_url {
        #[cfg(feature = "http")]
        Some(base_url) => Ok(Box::new(HttpStorySource::new(
            base_url,
            &config.story_path,
        )?)),
        #[cfg(not(feature = "http"))]
        Some(base_url) => Err(crate::error::StoryError::InvalidConfig(format!(
            "base url `{base_url}` requires the `http` feature"
        ))),
        None => Ok(Box::new(FileStorySource::new(&config.story_path))),
    }
}

/// Reads the story document from disk. A missing file answers 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorySource {
    path: PathBuf,
}

impl FileStorySource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorySource for FileStorySource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<StoryResponse, LoadFailure> {
        match fs::read_to_string(&self.path) {
            Ok(body) => Ok(StoryResponse::ok(body)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoryResponse::new(404, "")),
            Err(err) => Err(LoadFailure::Transport(format!(
                "failed to read `{}`: {err}",
                self.path.display()
            ))),
        }
    }
}

/// Answers with a fixed status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticStorySource {
    response: StoryResponse,
}

impl StaticStorySource {
    #[must_use]
    pub fn new(response: StoryResponse) -> Self {
        Self { response }
    }

    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StoryResponse::ok(body))
    }
}

impl StorySource for StaticStorySource {
    fn location(&self) -> String {
        "static".to_owned()
    }

    fn fetch(&self) -> Result<StoryResponse, LoadFailure> {
        Ok(self.response.clone())
    }
}

#[cfg(feature = "http")]
pub use http::HttpStorySource;

#[cfg(feature = "http")]
mod http {
    use reqwest::Url;
    use reqwest::blocking::Client;

    use crate::error::{LoadFailure, StoryError, StoryResult};

    use super::{StoryResponse, StorySource};

    /// One blocking GET per fetch, with the client's default timeout.
    #[derive(Debug, Clone)]
    pub struct HttpStorySource {
        url: Url,
        client: Client,
    }

    impl HttpStorySource {
        pub fn new(base_url: &str, story_path: &str) -> StoryResult<Self> {
            let base = Url::parse(base_url).map_err(|e| {
                StoryError::InvalidConfig(format!("invalid base url `{base_url}`: {e}"))
            })?;
            let url = base.join(story_path).map_err(|e| {
                StoryError::InvalidConfig(format!("invalid story path `{story_path}`: {e}"))
            })?;
            let client = Client::builder()
                .build()
                .map_err(|e| StoryError::InvalidConfig(format!("http client error: {e}")))?;
            Ok(Self { url, client })
        }

        #[must_use]
        pub fn url(&self) -> &Url {
            &self.url
        }
    }

    impl StorySource for HttpStorySource {
        fn location(&self) -> String {
            self.url.to_string()
        }

        fn fetch(&self) -> Result<StoryResponse, LoadFailure> {
            let response = self
                .client
                .get(self.url.clone())
                .send()
                .map_err(|e| LoadFailure::Transport(format!("request error: {e}")))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .map_err(|e| LoadFailure::Transport(format!("body read error: {e}")))?;
            Ok(StoryResponse::new(status, body))
        }
    }

}
