/// Prompt for the post body.
pub fn post_prompt(topic: &str) -> String {
    format!(
        "Write a professional LinkedIn post (100–120 words) about {}.",
        topic.trim()
    )
}

/// Prompt for the illustration.
pub fn image_prompt(topic: &str) -> String {
    format!("Professional illustration representing {}", topic.trim())
}
