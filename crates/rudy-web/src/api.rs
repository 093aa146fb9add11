//! API Client
//!
//! The page talks to the backend through [`ApiClient`]. Builds without
//! `RUDY_API_BASE` use the in-page mock; builds with it talk HTTP.

use std::rc::Rc;

use async_trait::async_trait;
use rudy_core::{ApiClient, ApiError, MockApiClient, Result};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::browser::BrowserSleeper;

/// Backend base URL baked in at build time, e.g.
/// `RUDY_API_BASE=http://localhost:3000 trunk build`. An empty value means
/// "same origin as the page".
const API_BASE: Option<&str> = option_env!("RUDY_API_BASE");

/// Client used by the landing page
pub fn client() -> Rc<dyn ApiClient> {
    match API_BASE {
        Some(base) => {
            let base = if base.is_empty() { page_origin() } else { base.to_string() };
            Rc::new(HttpApiClient::new(base))
        }
        None => Rc::new(MockApiClient::new(BrowserSleeper)),
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// JSON client backed by `fetch`
pub struct HttpApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Error body sent by the backend
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn decode(response: reqwest::Response) -> Result<Value> {
    let status = response.status();

    if status.is_success() {
        let text = response.text().await.map_err(network)?;
        if text.trim().is_empty() {
            return Ok(json!({}));
        }
        return Ok(serde_json::from_str(&text)?);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    Err(ApiError::Response {
        status: status.as_u16(),
        detail,
    })
}

#[async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn get(&self, url: &str) -> Result<Value> {
        let response = self.http.get(self.url(url)).send().await.map_err(network)?;
        decode(response).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        let response = self
            .http
            .post(self.url(url))
            .json(body)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    fn name(&self) -> &str {
        "HttpApi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        let response = http::Response::builder().status(status).body(body).unwrap();
        reqwest::Response::from(response)
    }

    #[tokio::test]
    async fn test_error_detail_is_kept() {
        let err = decode(response(409, r#"{"detail":"This email is already on the waiting list."}"#))
            .await
            .unwrap_err();

        assert!(matches!(
            &err,
            ApiError::Response { status: 409, detail: Some(detail) }
                if detail == "This email is already on the waiting list."
        ));
        assert_eq!(err.user_message(), "This email is already on the waiting list.");
    }

    #[tokio::test]
    async fn test_error_without_json_body_is_generic() {
        let err = decode(response(500, "Internal Server Error")).await.unwrap_err();

        assert!(matches!(err, ApiError::Response { status: 500, detail: None }));
        assert_eq!(err.user_message(), rudy_core::error::GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_empty_object() {
        assert_eq!(decode(response(200, "")).await.unwrap(), json!({}));
        assert_eq!(
            decode(response(200, r#"{"success":true}"#)).await.unwrap(),
            json!({ "success": true })
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = HttpApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/waiting-list"), "http://localhost:3000/waiting-list");
    }
}
