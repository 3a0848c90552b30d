use linkedin_client::LinkedInError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    /// Publish called without a token or without generated content
    #[error("Cannot publish yet: {0}")]
    Precondition(&'static str),

    #[error("Could not resolve your LinkedIn identity: {0}")]
    Identity(#[source] LinkedInError),

    #[error("Image registration failed: {0}")]
    Register(#[source] LinkedInError),

    #[error("Could not read the generated image: {0}")]
    ReadImage(#[from] std::io::Error),

    #[error("Image upload failed: {0}")]
    Upload(#[source] LinkedInError),

    #[error("Post creation failed: {0}")]
    CreatePost(#[source] LinkedInError),
}

impl PublishError {
    /// Upstream HTTP status of the failing LinkedIn call, if any.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            PublishError::Identity(e)
            | PublishError::Register(e)
            | PublishError::Upload(e)
            | PublishError::CreatePost(e) => e.status(),
            PublishError::Precondition(_) | PublishError::ReadImage(_) => None,
        }
    }

    /// Name of the stage that failed, for logs.
    pub fn stage(&self) -> &'static str {
        match self {
            PublishError::Precondition(_) => "precondition",
            PublishError::Identity(_) => "identity",
            PublishError::Register(_) => "register",
            PublishError::ReadImage(_) => "read_image",
            PublishError::Upload(_) => "upload",
            PublishError::CreatePost(_) => "create_post",
        }
    }
}
