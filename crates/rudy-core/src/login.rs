//! Google sign-in redirect

use crate::client::ApiClient;
use crate::error::Result;

/// Side effect of a successful login lookup: leave the page for `url`
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Look up the authorization URL and hand it to `navigator`.
///
/// Returns the URL that was navigated to, or `None` when the backend did not
/// provide one. Callers log errors and keep the visitor on the page.
pub async fn login<C, N>(client: &C, navigator: &N) -> Result<Option<String>>
where
    C: ApiClient + ?Sized,
    N: Navigator + ?Sized,
{
    let redirect = client.login_redirect().await?;
    let Some(url) = redirect.authorization_url else {
        tracing::debug!(client = client.name(), "login lookup returned no authorization url");
        return Ok(None);
    };
    tracing::info!(client = client.name(), "redirecting to Google sign-in");
    navigator.navigate(&url);
    Ok(Some(url))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::client::{DEMO_AUTHORIZATION_URL, LOGIN_PATH, MockApiClient};
    use crate::error::ApiError;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visited.borrow_mut().push(url.to_string());
        }
    }

    /// Wraps a client and records requested URLs
    struct Spy<C> {
        inner: C,
        requested: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl<C: ApiClient> ApiClient for Spy<C> {
        async fn get(&self, url: &str) -> Result<Value> {
            self.requested.borrow_mut().push(url.to_string());
            self.inner.get(url).await
        }

        async fn post(&self, url: &str, body: &Value) -> Result<Value> {
            self.requested.borrow_mut().push(url.to_string());
            self.inner.post(url, body).await
        }

        fn name(&self) -> &str {
            "Spy"
        }
    }

    struct Unreachable;

    #[async_trait(?Send)]
    impl ApiClient for Unreachable {
        async fn get(&self, _url: &str) -> Result<Value> {
            Err(ApiError::Network("connection refused".into()))
        }

        async fn post(&self, _url: &str, _body: &Value) -> Result<Value> {
            Err(ApiError::Network("connection refused".into()))
        }

        fn name(&self) -> &str {
            "Unreachable"
        }
    }

    struct NoUrl;

    #[async_trait(?Send)]
    impl ApiClient for NoUrl {
        async fn get(&self, _url: &str) -> Result<Value> {
            Ok(json!({}))
        }

        async fn post(&self, _url: &str, _body: &Value) -> Result<Value> {
            Ok(json!({}))
        }

        fn name(&self) -> &str {
            "NoUrl"
        }
    }

    #[tokio::test]
    async fn test_login_navigates_to_authorization_url() {
        let client = Spy { inner: MockApiClient::default(), requested: RefCell::default() };
        let navigator = RecordingNavigator::default();

        let url = login(&client, &navigator).await.unwrap();

        assert_eq!(url.as_deref(), Some(DEMO_AUTHORIZATION_URL));
        assert_eq!(*client.requested.borrow(), vec![LOGIN_PATH.to_string()]);
        assert_eq!(*navigator.visited.borrow(), vec![DEMO_AUTHORIZATION_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_login_failure_does_not_navigate() {
        let navigator = RecordingNavigator::default();
        let err = login(&Unreachable, &navigator).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_url_does_not_navigate() {
        let navigator = RecordingNavigator::default();
        assert_eq!(login(&NoUrl, &navigator).await.unwrap(), None);
        assert!(navigator.visited.borrow().is_empty());
    }
}
