//! Generate action - topic in, post text and image file out.

use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use crate::common::Session;
use crate::domains::generation::errors::GenerationError;
use crate::domains::generation::prompts::{image_prompt, post_prompt};
use crate::domains::generation::retry::retry_transient;
use crate::kernel::{ServerDeps, TEXT_TEMPERATURE};

/// Result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub text: String,
    pub image_path: PathBuf,
    pub content_type: String,
}

/// Run text then image generation and save the image under `deps.image_dir`.
///
/// Either both halves are produced or an error is returned; no file is left
/// behind on failure. `file_stem` namespaces the file (one per session).
pub async fn generate(
    deps: &ServerDeps,
    topic: &str,
    file_stem: &str,
) -> Result<GeneratedContent, GenerationError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(GenerationError::EmptyTopic);
    }

    // 1. Text: single call, no retry
    let text = deps
        .text_generator
        .generate_text(&post_prompt(topic), TEXT_TEMPERATURE)
        .await
        .map_err(GenerationError::Text)?;
    info!(chars = text.len(), "Post text generated");

    // 2. Image: retried on transient failures only
    let prompt = image_prompt(topic);
    let image = retry_transient(deps.image_retry, "image generation", || {
        deps.image_generator.generate_image(&prompt)
    })
    .await
    .map_err(|failure| {
        if failure.exhausted() {
            GenerationError::ImageRetriesExhausted {
                attempts: failure.attempts,
                source: failure.error,
            }
        } else {
            GenerationError::Image {
                attempts: failure.attempts,
                source: failure.error,
            }
        }
    })?;

    // 3. Persist
    let image_path = image_file_path(&deps.image_dir, file_stem, &image.content_type);
    tokio::fs::create_dir_all(&deps.image_dir).await?;
    save_image(&image_path, &image.bytes).await?;
    info!(path = %image_path.display(), bytes = image.bytes.len(), "Image saved");

    Ok(GeneratedContent {
        text,
        image_path,
        content_type: image.content_type,
    })
}

/// Generate and, only if everything succeeded, swap the content into the session.
///
/// On failure the session keeps whatever content it had before.
pub async fn generate_into_session(
    deps: &ServerDeps,
    session: &mut Session,
    topic: &str,
    file_stem: &str,
) -> Result<GeneratedContent, GenerationError> {
    let content = generate(deps, topic, file_stem).await?;

    if let Some(previous) = session.set_content(content.text.clone(), content.image_path.clone()) {
        if previous != content.image_path {
            remove_image(&previous).await;
        }
    }

    Ok(content)
}

/// Best-effort removal of a stale image.
pub async fn remove_image(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "Failed to remove old image");
        }
    }
}

/// Write to a `.part` file and rename into place, so a failed write never
/// leaves a partial image at `path`.
async fn save_image(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let written = match tokio::fs::write(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(e) => Err(e),
    };
    if written.is_err() {
        remove_image(&partial).await;
    }
    written
}

/// `{dir}/{stem}-{unique}.{ext}`; a fresh name per run so a failed write can
/// never clobber the image currently on preview.
fn image_file_path(dir: &Path, file_stem: &str, content_type: &str) -> PathBuf {
    let unique = Uuid::now_v7().simple().to_string();
    dir.join(format!("{}-{}.{}", file_stem, unique, extension_for(content_type)))
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        other => mime_guess::get_mime_extensions_str(other)
            .and_then(|exts| exts.first().copied())
            .unwrap_or("img"),
    }
}
