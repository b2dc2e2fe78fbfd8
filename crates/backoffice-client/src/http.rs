//! The request wrapper every live repository goes through.
//!
//! It attaches the bearer token, merges caller headers, and owns the one
//! cross-cutting failure mode: a 401 clears the session and sends the user
//! to the login screen.

use std::sync::Arc;
use std::time::Duration;

use backoffice_shared::ApiResponse;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::ApiError;
use crate::navigation::Navigator;
use crate::routes::Route;
use crate::session::SessionStore;

/// Per-call overrides of [`ApiClient::request`]. Defaults to a bodyless GET.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Vec<u8>>,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    pub fn put() -> Self {
        Self::with_method(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ApiError::InvalidRequest(format!("request body: {e}")))?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when `value` is present.
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue `options.method` against `base_url + endpoint` and decode the
    /// result envelope. The envelope's `code`/`msg` are left to the caller.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let headers = self.headers(&options.headers)?;

        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .headers(headers);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        debug!(method = %options.method, endpoint, "API request");

        let response = builder.send().await.map_err(|e| {
            error!(endpoint, error = %e, "API request failed");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(endpoint, "session rejected by backend, signing out");
            self.session.clear();
            self.navigator.navigate(Route::Login);
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let text = status.canonical_reason().unwrap_or("").to_string();
            error!(endpoint, status = status.as_u16(), "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                text,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(endpoint, error = %e, "failed to read API response");
            ApiError::Network(e)
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(endpoint, error = %e, "API response is not a result envelope");
            ApiError::Decode(e)
        })
    }

    fn headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::InvalidRequest(format!("token is not a header value: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidRequest(format!("header {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidRequest(format!("header {name}: {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use backoffice_store::{KeyValueStore, MemoryStore};

    use super::*;
    use crate::navigation::HistoryNavigator;

    fn client(storage: Arc<MemoryStore>) -> ApiClient {
        let session = Arc::new(SessionStore::new(storage));
        ApiClient::new(
            "http://localhost:8080/api/",
            Duration::from_secs(5),
            session,
            Arc::new(HistoryNavigator::default()),
        )
        .unwrap()
    }

    #[test]
    fn no_token_no_authorization_header() {
        let api = client(Arc::new(MemoryStore::new()));
        let headers = api.headers(&[]).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(api.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn token_and_caller_headers_merge() {
        let storage = Arc::new(MemoryStore::new());
        storage.set_item("token", "abc").unwrap();
        let api = client(storage);

        let headers = api
            .headers(&[
                ("X-Trace".to_string(), "1".to_string()),
                ("Content-Type".to_string(), "text/plain".to_string()),
            ])
            .unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(headers.get("x-trace").unwrap(), "1");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[test]
    fn invalid_header_is_rejected() {
        let api = client(Arc::new(MemoryStore::new()));
        let err = api
            .headers(&[("bad header".to_string(), "x".to_string())])
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn unserializable_body_is_an_invalid_request() {
        let body = std::collections::BTreeMap::from([((1, 2), "pair keys")]);
        let err = RequestOptions::post().json(&body).unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
        assert!(err.to_string().starts_with("Invalid request: request body"));
    }

    #[test]
    fn explicit_authorization_overrides_session_token() {
        let api = client(Arc::new(MemoryStore::new()));
        let headers = api
            .headers(&[("authorization".to_string(), "Bearer kept".to_string())])
            .unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer kept");
    }

    #[test]
    fn options_builders() {
        let opts = RequestOptions::post()
            .json(&serde_json::json!({ "a": 1 }))
            .unwrap()
            .query("page", 1)
            .query_opt("keyword", None::<String>)
            .query_opt("status", Some(2));
        assert_eq!(opts.method, Method::POST);
        assert_eq!(opts.body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
        assert_eq!(
            opts.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("status".to_string(), "2".to_string())
            ]
        );
    }
}
