//! Publish action - share the generated text and image on LinkedIn.

use linkedin_client::LinkedInClient;
use tracing::{info, warn};

use crate::common::utils::content_fingerprint;
use crate::common::{Session, UploadedAsset};
use crate::domains::publishing::errors::PublishError;
use crate::domains::publishing::models::{MediaAsset, Post};
use crate::kernel::ServerDeps;

#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub post_id: Option<String>,
    pub asset: String,
    /// The asset came from an earlier attempt for the same content.
    pub reused_asset: bool,
}

/// Publish the session's content.
///
/// Fails with `PublishError::Precondition` unless the session is signed in
/// and holds both text and image. An asset uploaded by a failed earlier
/// attempt for the same content is reused instead of registered again.
pub async fn publish(
    deps: &ServerDeps,
    session: &mut Session,
) -> Result<PublishOutcome, PublishError> {
    // 0. Preconditions
    let token = session
        .token()
        .ok_or(PublishError::Precondition("sign in with LinkedIn first"))?
        .to_string();
    if !session.has_content() {
        return Err(PublishError::Precondition("generate a post first"));
    }
    let (text, image_path) = match (&session.generated_text, &session.generated_image_path) {
        (Some(text), Some(path)) => (text.clone(), path.clone()),
        _ => return Err(PublishError::Precondition("generate a post first")),
    };

    let image = tokio::fs::read(&image_path).await?;
    let fingerprint = content_fingerprint(&text, &image);
    if session.published_fingerprint.as_deref() == Some(fingerprint.as_str()) {
        return Err(PublishError::Precondition(
            "this post has already been published; generate new content",
        ));
    }

    let linkedin: &LinkedInClient = &deps.linkedin;

    // 1. Resolve identity
    let me = linkedin
        .userinfo(&token)
        .await
        .map_err(PublishError::Identity)?;
    let owner = LinkedInClient::person_urn(&me.sub);

    // 2-3. Register and upload, unless this exact content is already up
    let reusable = session
        .uploaded_asset
        .as_ref()
        .filter(|a| a.content_fingerprint == fingerprint && a.owner_urn == owner)
        .map(|a| a.asset.clone());

    let (asset, reused_asset) = match reusable {
        Some(asset) => {
            info!(asset = %asset, "Reusing previously uploaded asset");
            (asset, true)
        }
        None => {
            let registration = linkedin
                .register_image_upload(&token, &owner)
                .await
                .map_err(PublishError::Register)?;
            let media = MediaAsset::from_registration(&owner, registration);

            linkedin
                .upload_image(&token, &media.upload_url, image)
                .await
                .map_err(PublishError::Upload)?;

            session.uploaded_asset = Some(UploadedAsset {
                content_fingerprint: fingerprint.clone(),
                owner_urn: media.owner_identifier.clone(),
                asset: media.asset_reference.clone(),
            });
            (media.asset_reference, false)
        }
    };

    // 4. Create the post
    let post = Post::public(&owner, &text, &asset);
    let created = linkedin
        .create_ugc_post(&token, &post.to_ugc())
        .await
        .map_err(|e| {
            warn!(status = ?e.status(), asset = %asset, "Post creation failed; asset kept for retry");
            PublishError::CreatePost(e)
        })?;

    session.uploaded_asset = None;
    session.published_fingerprint = Some(fingerprint);
    info!(post_id = ?created.id, reused_asset, "Post published");

    Ok(PublishOutcome {
        post_id: created.id,
        asset,
        reused_asset,
    })
}
