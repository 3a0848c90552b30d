use linkedin_client::{UgcPost, UploadRegistration, Visibility};

/// An image registered (and possibly uploaded) on behalf of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub owner_identifier: String,
    pub asset_reference: String,
    pub upload_url: String,
}

impl MediaAsset {
    pub fn from_registration(owner_identifier: &str, registration: UploadRegistration) -> Self {
        Self {
            owner_identifier: owner_identifier.to_string(),
            asset_reference: registration.asset,
            upload_url: registration.upload_url,
        }
    }
}

/// What gets posted. Built once per publish, not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub author: String,
    pub text: String,
    pub media_reference: String,
    pub visibility: Visibility,
}

impl Post {
    pub fn public(author: &str, text: &str, media_reference: &str) -> Self {
        Self {
            author: author.to_string(),
            text: text.to_string(),
            media_reference: media_reference.to_string(),
            visibility: Visibility::Public,
        }
    }

    pub fn to_ugc(&self) -> UgcPost {
        UgcPost::image_share(
            &self.author,
            &self.text,
            &self.media_reference,
            self.visibility,
        )
    }
}
