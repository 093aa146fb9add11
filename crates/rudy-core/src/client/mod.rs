//! API Client
//!
//! The landing page talks to its backend through two endpoints. The
//! [`ApiClient`] trait keeps the page independent of whether those calls are
//! served by [`MockApiClient`] or by a real HTTP transport.

mod mock;
mod sleep;

pub use mock::{DEFAULT_LATENCY, DEMO_AUTHORIZATION_URL, MockApiClient};
#[cfg(feature = "tokio")]
pub use sleep::TokioSleeper;
pub use sleep::Sleeper;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::model::{LoginRedirect, WaitlistForm, WaitlistReceipt};

/// Login redirect lookup
pub const LOGIN_PATH: &str = "/auth/login/google";

/// Waitlist submission
pub const WAITLIST_PATH: &str = "/waiting-list";

/// Minimal JSON-over-HTTP client.
///
/// Futures are not required to be `Send` so browser transports, whose
/// futures hold JS values, can implement it.
#[async_trait(?Send)]
pub trait ApiClient {
    /// `GET url`, returning the decoded JSON body
    async fn get(&self, url: &str) -> Result<Value>;

    /// `POST url` with a JSON body, returning the decoded JSON body
    async fn post(&self, url: &str, body: &Value) -> Result<Value>;

    /// Client name, for logs
    fn name(&self) -> &str;

    /// Ask the backend where to send the visitor for Google sign-in
    async fn login_redirect(&self) -> Result<LoginRedirect> {
        let data = self.get(LOGIN_PATH).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Submit the waitlist form
    async fn join_waitlist(&self, form: &WaitlistForm) -> Result<WaitlistReceipt> {
        let body = serde_json::to_value(form)?;
        let data = self.post(WAITLIST_PATH, &body).await?;
        Ok(serde_json::from_value(data)?)
    }
}
