//! UI events - one variant per button, dispatched by button identity.

use serde::Deserialize;
use tracing::{info, warn};

use crate::common::Session;
use crate::domains::generation::generate_into_session;
use crate::domains::publishing::publish;
use crate::kernel::ServerDeps;
use crate::server::error::AppError;

/// Body of `POST /action`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionForm {
    pub button: String,
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Generate { topic: String },
    Upload,
}

impl TryFrom<ActionForm> for UiEvent {
    type Error = AppError;

    fn try_from(form: ActionForm) -> Result<Self, Self::Error> {
        match form.button.as_str() {
            "generate" => Ok(UiEvent::Generate { topic: form.topic }),
            "upload" => Ok(UiEvent::Upload),
            other => Err(AppError::UnknownButton(other.to_string())),
        }
    }
}

pub const POSTED_MESSAGE: &str = "🎉 Posted successfully on LinkedIn!";
pub const GENERATED_MESSAGE: &str = "Post generated. Review it below before uploading.";
pub const SIGN_IN_FIRST_MESSAGE: &str = "Please login with LinkedIn to generate content.";

/// Run the handler for `event` against a locked session.
///
/// Every outcome ends up as a flash notice; nothing here fails the request.
pub async fn dispatch(
    deps: &ServerDeps,
    session_key: &str,
    session: &mut Session,
    event: UiEvent,
) {
    if !session.authenticated {
        session.flash_error(SIGN_IN_FIRST_MESSAGE);
        return;
    }

    match event {
        UiEvent::Generate { topic } => {
            match generate_into_session(deps, session, &topic, &image_stem(session_key)).await {
                Ok(content) => {
                    info!(content_type = %content.content_type, "Content generated");
                    session.flash_success(GENERATED_MESSAGE);
                }
                Err(e) => {
                    warn!(status = ?e.upstream_status(), error = %e, "Generation failed");
                    session.flash_error(e.to_string());
                }
            }
        }
        UiEvent::Upload => match publish(deps, session).await {
            Ok(_) => session.flash_success(POSTED_MESSAGE),
            Err(e) => {
                warn!(
                    stage = e.stage(),
                    status = ?e.upstream_status(),
                    error = %e,
                    "Publish failed"
                );
                session.flash_error(e.to_string());
            }
        },
    }
}

/// Image file stem for a session; never the full session key.
fn image_stem(session_key: &str) -> String {
    let prefix: String = session_key
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .collect();
    format!("session-{}", prefix)
}
