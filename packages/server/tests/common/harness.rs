//! Test harness for integration testing.
//!
//! Each test gets its own LinkedIn stub, scratch image directory and mock
//! generators. Nothing leaves the machine.

use anyhow::{Context, Result};
use axum::Router;
use linkedin_client::{LinkedInClient, LinkedInOptions};
use poster_core::common::Session;
use poster_core::domains::generation::RetryPolicy;
use poster_core::kernel::test_dependencies::png_bytes;
use poster_core::kernel::{MockImageGenerator, MockTextGenerator, ServerDeps};
use poster_core::server::auth::SessionStore;
use poster_core::server::{build_app, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_context::AsyncTestContext;

use super::LinkedInStub;

pub const REDIRECT_URI: &str = "https://poster.example/";

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let mut session = ctx.signed_in_session_with_content().await;
///     publish(&ctx.deps, &mut session).await.unwrap();
/// }
/// ```
pub struct TestHarness {
    pub stub: LinkedInStub,
    pub text: MockTextGenerator,
    pub images: MockImageGenerator,
    pub image_dir: TempDir,
    pub deps: Arc<ServerDeps>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.stub.shutdown();
    }
}

impl TestHarness {
    /// Start the stub and wire ServerDeps against it.
    ///
    /// Image retries run without delay; tests that care about the delay
    /// build their own policy.
    pub async fn new() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let stub = LinkedInStub::start()
            .await
            .context("Failed to start LinkedIn stub")?;
        let image_dir = tempfile::tempdir().context("Failed to create image dir")?;
        let text = MockTextGenerator::new();
        let images = MockImageGenerator::new();

        let deps = Arc::new(build_deps(&stub, &text, &images, image_dir.path().to_path_buf()));

        Ok(Self {
            stub,
            text,
            images,
            image_dir,
            deps,
        })
    }

    /// Router over the harness deps with a fresh session store
    pub fn app(&self) -> Router {
        build_app(AppState::new(
            self.deps.clone(),
            Arc::new(SessionStore::default()),
            false,
        ))
    }

    pub fn signed_in_session(&self) -> Session {
        let mut session = Session::new();
        session.sign_in(super::ACCESS_TOKEN.to_string());
        session
    }

    /// Signed-in session holding text and a PNG on disk
    pub async fn signed_in_session_with_content(&self) -> Session {
        let mut session = self.signed_in_session();
        let path = self.write_image("draft.png", &png_bytes()).await;
        session.set_content("Rust makes systems programming approachable.".into(), path);
        session
    }

    pub async fn write_image(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.image_dir.path().join(name);
        tokio::fs::write(&path, bytes)
            .await
            .expect("Failed to write test image");
        path
    }
}

fn build_deps(
    stub: &LinkedInStub,
    text: &MockTextGenerator,
    images: &MockImageGenerator,
    image_dir: PathBuf,
) -> ServerDeps {
    let options = LinkedInOptions::new("test-client", "test-secret", REDIRECT_URI)
        .with_token_url(stub.token_url())
        .with_api_base_url(stub.base_url.clone());

    ServerDeps::new(
        Arc::new(LinkedInClient::new(options)),
        Arc::new(text.clone()),
        Arc::new(images.clone()),
        image_dir,
        RetryPolicy {
            max_attempts: 3,
            delay: Duration::ZERO,
        },
    )
}
