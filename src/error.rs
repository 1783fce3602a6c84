use thiserror::Error;

pub type StoryResult<T> = Result<T, StoryError>;

/// Underlying cause of a failed story load.
///
/// Callers only ever see [`StoryError::Unavailable`]; the cause is kept for
/// operator diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("non-success status: {status}")]
    Status { status: u16 },

    #[error("malformed story document: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("story data unavailable: {0}")]
    Unavailable(#[source] LoadFailure),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to serialize page: {0}")]
    PageSerialization(String),
}

impl StoryError {
    #[must_use]
    pub fn cause(&self) -> Option<&LoadFailure> {
        match self {
            Self::Unavailable(cause) => Some(cause),
            Self::InvalidConfig(_) | Self::PageSerialization(_) => None,
        }
    }
}

impl From<LoadFailure> for StoryError {
    fn from(cause: LoadFailure) -> Self {
        Self::Unavailable(cause)
    }
}
