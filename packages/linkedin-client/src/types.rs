use serde::{Deserialize, Serialize};

/// Recipe for images attached to feed shares.
pub const FEEDSHARE_IMAGE_RECIPE: &str = "urn:li:digitalmediaRecipe:feedshare-image";

const UPLOAD_MECHANISM_KEY: &str = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest";

/// Response of the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
}

/// OpenID Connect user info (`/v2/userinfo`).
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,
    pub email: Option<String>,
}

// =============================================================================
// Asset registration
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RegisterUploadBody<'a> {
    #[serde(rename = "registerUploadRequest")]
    pub register_upload_request: RegisterUploadRequest<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RegisterUploadRequest<'a> {
    pub owner: &'a str,
    pub recipes: Vec<&'static str>,
    #[serde(rename = "serviceRelationships")]
    pub service_relationships: Vec<ServiceRelationship>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ServiceRelationship {
    #[serde(rename = "relationshipType")]
    pub relationship_type: &'static str,
    pub identifier: &'static str,
}

impl<'a> RegisterUploadBody<'a> {
    pub(crate) fn feedshare_image(owner: &'a str) -> Self {
        Self {
            register_upload_request: RegisterUploadRequest {
                owner,
                recipes: vec![FEEDSHARE_IMAGE_RECIPE],
                service_relationships: vec![ServiceRelationship {
                    relationship_type: "OWNER",
                    identifier: "urn:li:userGeneratedContent",
                }],
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RegisterUploadResponse {
    pub value: RegisterUploadValue,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RegisterUploadValue {
    #[serde(rename = "uploadMechanism", default)]
    pub upload_mechanism: serde_json::Map<String, serde_json::Value>,
    pub asset: Option<String>,
}

/// Where to PUT the image bytes, and the asset URN to reference in a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRegistration {
    pub upload_url: String,
    pub asset: String,
}

impl RegisterUploadResponse {
    pub(crate) fn into_registration(self) -> Option<UploadRegistration> {
        let upload_url = self
            .value
            .upload_mechanism
            .get(UPLOAD_MECHANISM_KEY)
            .and_then(|m| m.get("uploadUrl"))
            .and_then(|u| u.as_str())?
            .to_string();
        let asset = self.value.asset?;
        Some(UploadRegistration { upload_url, asset })
    }
}

// =============================================================================
// UGC posts
// =============================================================================

/// Who can see a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
}

/// An image share, as accepted by `/v2/ugcPosts`.
#[derive(Debug, Clone, Serialize)]
pub struct UgcPost {
    pub author: String,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: String,
    #[serde(rename = "specificContent")]
    pub specific_content: SpecificContent,
    pub visibility: MemberVisibility,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareContent {
    #[serde(rename = "shareCommentary")]
    pub share_commentary: ShareCommentary,
    #[serde(rename = "shareMediaCategory")]
    pub share_media_category: String,
    pub media: Vec<ShareMedia>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareMedia {
    pub status: String,
    pub media: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberVisibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: Visibility,
}

impl UgcPost {
    /// Published image share with a single media item.
    pub fn image_share(
        author: impl Into<String>,
        text: impl Into<String>,
        asset: impl Into<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            author: author.into(),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text: text.into() },
                    share_media_category: "IMAGE".to_string(),
                    media: vec![ShareMedia {
                        status: "READY".to_string(),
                        media: asset.into(),
                    }],
                },
            },
            visibility: MemberVisibility {
                member_network_visibility: visibility,
            },
        }
    }
}

/// Result of a 201 from `/v2/ugcPosts`.
#[derive(Debug, Clone, Default)]
pub struct CreatedPost {
    pub id: Option<String>,
}
