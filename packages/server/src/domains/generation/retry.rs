//! Fixed-delay retry for transient provider failures.

use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use ai_client::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Timeout, connection failure or 5xx - will retry if attempts remain
    Retryable,
    /// Anything else - surfaced immediately
    NonRetryable,
}

impl ErrorKind {
    pub fn of(error: &AiError) -> Self {
        if error.is_transient() {
            ErrorKind::Retryable
        } else {
            ErrorKind::NonRetryable
        }
    }

    pub fn should_retry(&self) -> bool {
        matches!(self, ErrorKind::Retryable)
    }
}

/// Why a retried operation gave up.
#[derive(Debug)]
pub struct RetryFailure {
    pub attempts: u32,
    pub kind: ErrorKind,
    pub error: AiError,
}

impl RetryFailure {
    /// True when the last error was transient and the attempts ran out.
    pub fn exhausted(&self) -> bool {
        self.kind.should_retry()
    }
}

/// Run `op` until it succeeds, fails permanently, or the policy runs out.
pub async fn retry_transient<T, F, Fut>(
    policy: RetryPolicy,
    what: &str,
    mut op: F,
) -> Result<T, RetryFailure>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AiError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(what, attempt, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) => {
                let kind = ErrorKind::of(&error);
                if !kind.should_retry() || attempt >= max_attempts {
                    warn!(what, attempt, ?kind, error = %error, "Giving up");
                    return Err(RetryFailure {
                        attempts: attempt,
                        kind,
                        error,
                    });
                }

                warn!(
                    what,
                    attempt,
                    max_attempts,
                    delay_ms = policy.delay.as_millis() as u64,
                    error = %error,
                    "Transient failure, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}
