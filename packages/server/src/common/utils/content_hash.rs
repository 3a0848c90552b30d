use sha2::{Digest, Sha256};

/// Fingerprint of a post's content: its text plus the exact image bytes.
///
/// Used to recognise that an asset uploaded earlier still matches what is
/// about to be posted. No normalisation: any change to either part yields a
/// new fingerprint.
pub fn content_fingerprint(text: &str, image: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((text.len() as u64).to_be_bytes());
    hasher.update(text.as_bytes());
    hasher.update(image);
    format!("{:x}", hasher.finalize())
}
