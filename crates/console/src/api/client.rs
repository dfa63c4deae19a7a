//! Reqwest-backed client for the reservation backend.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::config::ConsoleConfig;

use super::{ApiError, flatten_error_body};

/// HTTP client for the reservation backend.
///
/// Cheap to clone; all clones share one connection pool and one token slot.
/// Every call is at-most-once: the client never retries on its own.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    /// Base URL including the version prefix, without a trailing slash.
    base_url: String,
    /// Bearer token for the current session, when one exists.
    token: RwLock<Option<SecretString>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    #[must_use]
    pub fn new(config: &ConsoleConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
                token: RwLock::new(None),
            }),
        }
    }

    /// Set the bearer token attached to subsequent requests.
    pub async fn set_token(&self, token: SecretString) {
        *self.inner.token.write().await = Some(token);
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated.
    pub async fn clear_token(&self) {
        *self.inner.token.write().await = None;
    }

    /// GET a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable body.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.dispatch(Method::GET, path, None::<&()>, None::<&()>).await?;
        parse_body(&body)
    }

    /// GET a JSON resource with query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable body.
    #[instrument(skip(self, query))]
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let body = self
            .dispatch(Method::GET, path, None::<&()>, Some(query))
            .await?;
        parse_body(&body)
    }

    /// POST a JSON body, parsing the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable body.
    #[instrument(skip(self, body))]
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .dispatch(Method::POST, path, Some(body), None::<&()>)
            .await?;
        parse_body(&text)
    }

    /// PUT a JSON body, parsing the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable body.
    #[instrument(skip(self, body))]
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .dispatch(Method::PUT, path, Some(body), None::<&()>)
            .await?;
        parse_body(&text)
    }

    /// PUT without a request body, discarding any response body.
    ///
    /// Used for lifecycle transitions whose acknowledgement carries no data
    /// the console needs - the post-call reload is authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn put_unit(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(Method::PUT, path, None::<&()>, None::<&()>)
            .await?;
        Ok(())
    }

    /// PUT without a body but with query parameters, discarding the response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self, query))]
    pub async fn put_unit_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<(), ApiError> {
        self.dispatch(Method::PUT, path, None::<&()>, Some(query))
            .await?;
        Ok(())
    }

    /// DELETE a resource. Success may return no body; either way the body
    /// is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(Method::DELETE, path, None::<&()>, None::<&()>)
            .await?;
        Ok(())
    }

    /// Execute one request and return the raw success body.
    ///
    /// Centralizes token attachment and error normalization. A 204 or empty
    /// body resolves to an empty string, which the typed wrappers treat as
    /// an empty acknowledgement.
    async fn dispatch<B: Serialize + ?Sized, Q: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);

        let mut request = self.inner.client.request(method, &url);

        if let Some(token) = self.inner.token.read().await.as_ref() {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::AuthRequired);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: flatten_error_body(status.as_u16(), &body),
            });
        }

        if status == StatusCode::NO_CONTENT {
            debug!(%url, "empty acknowledgement");
            return Ok(String::new());
        }

        Ok(response.text().await?)
    }
}

/// Parse a success body, treating an empty body as JSON `null` so that
/// callers expecting no payload (e.g. `Option<T>` or acknowledgement types
/// with defaults) still resolve.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let effective = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(effective)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_typed() {
        let value: Vec<i32> = parse_body("[1, 2, 3]").unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_body_empty_resolves_to_null() {
        let value: Option<i32> = parse_body("").unwrap();
        assert_eq!(value, None);

        let value: serde_json::Value = parse_body("   ").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_parse_body_invalid_json_is_typed_error() {
        let result: Result<Vec<i32>, ApiError> = parse_body("not json");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[tokio::test]
    async fn test_token_slot() {
        let config = ConsoleConfig {
            api_url: url::Url::parse("http://127.0.0.1:8000/api/v1").unwrap(),
            session_file: std::path::PathBuf::from(".hotelier/session.json"),
            timeout: std::time::Duration::from_secs(30),
        };
        let client = ApiClient::new(&config);

        assert!(client.inner.token.read().await.is_none());
        client.set_token(SecretString::from("tok".to_string())).await;
        assert!(client.inner.token.read().await.is_some());
        client.clear_token().await;
        assert!(client.inner.token.read().await.is_none());
    }
}
