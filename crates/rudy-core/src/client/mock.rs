//! Mock API Client
//!
//! For demos and tests. Answers the two landing page endpoints with canned
//! data and never fails.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::sleep::Sleeper;
use super::{ApiClient, LOGIN_PATH, WAITLIST_PATH};
use crate::error::Result;

/// Authorization URL handed out by the mock login endpoint
pub const DEMO_AUTHORIZATION_URL: &str =
    "https://accounts.google.com/oauth/authorize?client_id=demo";

/// Simulated waitlist round trip
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Mock client with a fixed login URL and a delayed waitlist receipt
pub struct MockApiClient {
    sleeper: Box<dyn Sleeper>,
    latency: Duration,
    authorization_url: String,
}

#[cfg(feature = "tokio")]
impl Default for MockApiClient {
    fn default() -> Self {
        Self::new(super::TokioSleeper)
    }
}

impl MockApiClient {
    pub fn new(sleeper: impl Sleeper + 'static) -> Self {
        Self {
            sleeper: Box::new(sleeper),
            latency: DEFAULT_LATENCY,
            authorization_url: DEMO_AUTHORIZATION_URL.into(),
        }
    }

    /// Override the simulated waitlist delay
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn with_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = url.into();
        self
    }
}

#[async_trait(?Send)]
impl ApiClient for MockApiClient {
    async fn get(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "mock GET");
        if url == LOGIN_PATH {
            return Ok(json!({ "authorization_url": self.authorization_url }));
        }
        Ok(json!({}))
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        tracing::debug!(url, %body, "mock POST");
        if url == WAITLIST_PATH {
            self.sleeper.sleep(self.latency).await;
            return Ok(json!({ "success": true }));
        }
        Ok(json!({}))
    }

    fn name(&self) -> &str {
        "MockApi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WaitlistForm;

    #[tokio::test]
    async fn test_login_url() {
        let client = MockApiClient::default();

        let data = client.get(LOGIN_PATH).await.unwrap();
        assert_eq!(data["authorization_url"], DEMO_AUTHORIZATION_URL);

        let redirect = client.login_redirect().await.unwrap();
        assert_eq!(redirect.authorization_url.as_deref(), Some(DEMO_AUTHORIZATION_URL));
    }

    #[tokio::test]
    async fn test_unknown_routes_return_empty_object() {
        let client = MockApiClient::default().with_latency(Duration::ZERO);

        assert_eq!(client.get("/me").await.unwrap(), json!({}));
        assert_eq!(client.post("/campaigns", &json!({})).await.unwrap(), json!({}));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waitlist_waits_for_latency() {
        let client = MockApiClient::default();
        let started = tokio::time::Instant::now();

        let receipt = client.join_waitlist(&WaitlistForm::default()).await.unwrap();

        assert!(receipt.success);
        assert!(started.elapsed() >= DEFAULT_LATENCY);
    }

    #[tokio::test]
    async fn test_custom_authorization_url() {
        let client = MockApiClient::default().with_authorization_url("https://auth.example/start");
        let redirect = client.login_redirect().await.unwrap();
        assert_eq!(redirect.authorization_url.as_deref(), Some("https://auth.example/start"));
    }
}
