//! Server-rendered HTML for the composer page.
//!
//! Sections appear in the order a member walks through them: sign in,
//! generate, preview, publish. Later sections are hidden until the earlier
//! ones are satisfied.

use crate::common::{Notice, Session};

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: linear-gradient(135deg, #007182 20%, #001699 100%);
    color: white;
    min-height: 100vh;
    margin: 0;
}
main { max-width: 720px; margin: 0 auto; padding: 32px 16px; }
h1, h2 { color: #FFD700; }
hr { border: none; border-top: 1px solid rgba(255, 255, 255, 0.3); margin: 24px 0; }
a.login { color: #FFD700; font-weight: bold; }
input[type=text] { width: 100%; padding: 8px; border-radius: 6px; border: none; box-sizing: border-box; }
button { background-color: #FF5733; color: white; border: none; border-radius: 8px; padding: 8px 20px; font-weight: bold; cursor: pointer; margin-top: 8px; }
button:hover { background-color: #FFC300; color: black; }
button.link { background: none; color: #FFD700; padding: 0; font-weight: normal; text-decoration: underline; }
.notice { padding: 12px; border-radius: 8px; margin-bottom: 16px; }
.notice.success { background: rgba(50, 205, 50, 0.2); color: #32CD32; }
.notice.error { background: rgba(255, 87, 51, 0.25); color: #FFDAD1; }
.info { background: rgba(255, 255, 255, 0.1); padding: 12px; border-radius: 8px; }
.post-text { white-space: pre-wrap; background: rgba(0, 0, 0, 0.2); padding: 12px; border-radius: 8px; }
img.preview { max-width: 100%; border-radius: 8px; }
"#;

/// Render the index page for one session.
///
/// `notice` is the flash taken from the session for this render;
/// `image_version` busts the browser cache when the image changes.
pub fn index_page(session: &Session, notice: Option<&Notice>, image_version: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI LinkedIn Auto Poster</title>
    <style>
{css}
    </style>
</head>
<body>
    <main>
        <h1>🤖 AI LinkedIn Auto Poster</h1>
        <p>Generate AI content and post it directly to LinkedIn</p>
{notice}
        <hr>
{auth}
{generate}
{preview}
{upload}
    </main>
</body>
</html>"#,
        css = CSS,
        notice = notice_html(notice),
        auth = auth_section(session),
        generate = generate_section(session),
        preview = preview_section(session, image_version),
        upload = upload_section(session),
    )
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        Some(Notice::Success(message)) => format!(
            r#"        <div class="notice success">{}</div>"#,
            escape_html(message)
        ),
        Some(Notice::Error(message)) => format!(
            r#"        <div class="notice error">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn auth_section(session: &Session) -> String {
    if session.authenticated {
        r#"        <h2>🔐 LinkedIn Authorization</h2>
        <form method="post" action="/logout">
            <span>Signed in with LinkedIn.</span>
            <button type="submit" class="link">Sign out</button>
        </form>"#
            .to_string()
    } else {
        r#"        <h2>🔐 LinkedIn Authorization</h2>
        <p><a class="login" href="/login">Login with LinkedIn</a></p>"#
            .to_string()
    }
}

fn generate_section(session: &Session) -> String {
    if !session.authenticated {
        return r#"        <p class="info">Please login with LinkedIn to generate content.</p>"#
            .to_string();
    }

    r#"        <hr>
        <h2>✍️ Generate LinkedIn Post</h2>
        <form method="post" action="/action">
            <label for="topic">Enter your topic</label>
            <input type="text" id="topic" name="topic" required>
            <button type="submit" name="button" value="generate">Generate</button>
        </form>"#
        .to_string()
}

fn preview_section(session: &Session, image_version: &str) -> String {
    if !session.has_content() {
        return String::new();
    }
    let text = session.generated_text.as_deref().unwrap_or_default();

    format!(
        r#"        <hr>
        <h2>📝 Generated Text</h2>
        <div class="post-text">{text}</div>
        <h2>🖼️ Generated Image</h2>
        <img class="preview" src="/image?v={version}" alt="AI Generated Image">"#,
        text = escape_html(text),
        version = escape_html(image_version),
    )
}

fn upload_section(session: &Session) -> String {
    if !session.can_publish() {
        return String::new();
    }

    r#"        <form method="post" action="/action">
            <button type="submit" name="button" value="upload">Upload to LinkedIn</button>
        </form>"#
        .to_string()
}

/// Minimal escaping for text placed in element bodies and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
