// Main entry point for the post composer server

use std::sync::Arc;
use std::time::Duration;

use ai_client::{GeminiClient, HuggingFaceClient};
use anyhow::{Context, Result};
use linkedin_client::{LinkedInClient, LinkedInOptions};
use poster_core::kernel::{GeminiAdapter, HuggingFaceAdapter, ServerDeps};
use poster_core::server::{auth::SessionStore, build_app, AppState};
use poster_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,poster_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AI LinkedIn Auto Poster");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        text_model = %config.gemini_model,
        image_model = %config.image_model,
        "Configuration loaded"
    );

    // One HTTP client (and timeout) shared by every upstream call
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let linkedin = LinkedInClient::with_http_client(
        LinkedInOptions::new(
            config.linkedin_client_id.clone(),
            config.linkedin_client_secret.clone(),
            config.redirect_uri.clone(),
        ),
        http.clone(),
    );
    let gemini = GeminiClient::new(config.gemini_api_key.clone())
        .with_model(config.gemini_model.clone())
        .with_http_client(http.clone());
    let huggingface = HuggingFaceClient::new(config.hf_api_key.clone())
        .with_model(config.image_model.clone())
        .with_http_client(http);

    tokio::fs::create_dir_all(&config.image_dir)
        .await
        .with_context(|| format!("Failed to create image directory {}", config.image_dir.display()))?;

    let deps = Arc::new(ServerDeps::new(
        Arc::new(linkedin),
        Arc::new(GeminiAdapter(gemini)),
        Arc::new(HuggingFaceAdapter(huggingface)),
        config.image_dir.clone(),
        config.image_retry,
    ));
    let sessions = Arc::new(SessionStore::new(config.session_ttl_hours));

    // Expired sessions (and their images) are torn down in the background
    let cleanup_sessions = sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = cleanup_sessions.cleanup_expired().await;
            if removed > 0 {
                tracing::info!(removed, "Expired sessions cleaned up");
            }
        }
    });

    let secure_cookies = config.redirect_uri.starts_with("https://");
    let app = build_app(AppState::new(deps, sessions, secure_cookies));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Composer: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
