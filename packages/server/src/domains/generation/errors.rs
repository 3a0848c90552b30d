use ai_client::AiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Please enter a topic first")]
    EmptyTopic,

    #[error("Text generation failed: {0}")]
    Text(#[source] AiError),

    #[error("Image generation failed: {source}")]
    Image {
        attempts: u32,
        #[source]
        source: AiError,
    },

    #[error("Image generation failed after {attempts} attempts: {source}")]
    ImageRetriesExhausted {
        attempts: u32,
        #[source]
        source: AiError,
    },

    #[error("Could not save the generated image: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    /// Upstream HTTP status, when a provider answered with one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GenerationError::Text(e)
            | GenerationError::Image { source: e, .. }
            | GenerationError::ImageRetriesExhausted { source: e, .. } => e.status(),
            GenerationError::EmptyTopic | GenerationError::Io(_) => None,
        }
    }
}
