//! HTTP build hook client.
//!
//! POSTs a JSON [`ContentPublished`] payload to the configured hook URL.
//! Transport errors, 429 and 5xx responses are retried with exponential
//! backoff; any other non-success status fails immediately.
//!
//! When a signing secret is configured the body is signed with
//! HMAC-SHA256 and sent as `X-Webhook-Signature: sha256=<hex>`.

use std::time::Duration;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::domain::content::ContentPublished;
use crate::ports::{BuildNotifier, NotifyError};

/// Upper bound for a single backoff delay.
const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Retry and transport settings for [`HttpBuildHook`].
#[derive(Debug, Clone)]
pub struct HttpBuildHookConfig {
    pub url: String,
    pub secret: Option<SecretString>,
    /// Total attempts including the first one.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub timeout: Duration,
}

impl HttpBuildHookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: None,
            max_attempts: 4,
            initial_backoff: Duration::from_millis(500),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_secret(mut self, secret: SecretString) -> Self {
        self.secret = Some(secret);
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Delay before retry number `attempt` (1-based): doubles each time.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(MAX_BACKOFF)
            .min(MAX_BACKOFF)
    }
}

/// Build notifier that calls a webhook over HTTP.
pub struct HttpBuildHook {
    client: reqwest::Client,
    config: HttpBuildHookConfig,
}

impl HttpBuildHook {
    pub fn new(config: HttpBuildHookConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| NotifyError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    async fn send_once(&self, body: &str) -> Result<(), NotifyError> {
        let mut request = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .header("User-Agent", "smartwatch-api-build-hook/1.0");

        if let Some(signature) = self.sign(body)? {
            request = request.header("X-Webhook-Signature", format!("sha256={}", signature));
        }

        let response = request
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotifyError::Rejected {
                status: status.as_u16(),
            })
        }
    }

    fn sign(&self, body: &str) -> Result<Option<String>, NotifyError> {
        let Some(secret) = &self.config.secret else {
            return Ok(None);
        };
        Ok(Some(sign_payload(secret.expose_secret(), body)?))
    }
}

/// Hex-encoded HMAC-SHA256 of `body` under `secret`.
pub fn sign_payload(secret: &str, body: &str) -> Result<String, NotifyError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| NotifyError::Transport(format!("invalid signing key: {}", e)))?;
    mac.update(body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[async_trait]
impl BuildNotifier for HttpBuildHook {
    async fn notify(&self, event: &ContentPublished) -> Result<(), NotifyError> {
        let body = serde_json::to_string(event)
            .map_err(|e| NotifyError::Transport(format!("failed to encode event: {}", e)))?;

        let mut attempt = 1;
        loop {
            match self.send_once(&body).await {
                Ok(()) => {
                    tracing::info!(
                        event_id = %event.event_id,
                        content_id = %event.content_id,
                        attempt,
                        "Build hook notified"
                    );
                    return Ok(());
                }
                Err(e) if e.is_retryable() && attempt < self.config.max_attempts => {
                    let delay = self.config.backoff_for(attempt);
                    tracing::warn!(
                        event_id = %event.event_id,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Build hook delivery failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(
                        event_id = %event.event_id,
                        attempt,
                        error = %e,
                        "Build hook delivery failed"
                    );
                    return Err(e);
                }
            }
        }
    }
}
