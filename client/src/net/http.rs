//! HTTP transport seam between the API helpers and the browser.
//!
//! ARCHITECTURE
//! ============
//! `api` builds [`ApiRequest`]s and interprets [`ApiResponse`]s; a
//! [`Transport`] moves them over the wire. The browser build uses
//! [`GlooTransport`] (`gloo-net` fetch). Tests substitute an in-memory
//! recorder, which is how request order and counts are asserted.
//!
//! CONFIGURATION
//! =============
//! The API host is fixed at compile time: `QUIZMAP_API_BASE` when set while
//! building, otherwise [`DEFAULT_API_BASE`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use super::types::ErrorBody;

/// Remote quiz API host used when no build-time override is present.
pub const DEFAULT_API_BASE: &str = "https://fk7zu3f4gj.execute-api.eu-north-1.amazonaws.com";

/// Base URL every API path is appended to (no trailing slash).
pub fn api_base() -> &'static str {
    resolve_api_base(option_env!("QUIZMAP_API_BASE"))
}

fn resolve_api_base(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

const JSON_MIME: &str = "application/json";
const CONTENT_TYPE: &str = "Content-Type";

/// Headers a request carries besides `Authorization`.
///
/// `Content-Type` goes only on requests with a body and on `DELETE`, so a
/// plain `GET` stays a CORS simple request without a preflight.
pub fn request_headers(request: &ApiRequest) -> Vec<(&'static str, &'static str)> {
    let mut headers = vec![("Accept", JSON_MIME)];
    if request.body.is_some() || request.method == Method::Delete {
        headers.push((CONTENT_TYPE, JSON_MIME));
    }
    headers
}

/// Transport-level failure categories.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A bearer token was required but none is stored.
    #[error("not authenticated")]
    MissingToken,
}

impl ApiError {
    /// Server-provided `error` text for status failures.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request relative to [`api_base`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), bearer: None, body: None }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, path: path.into(), bearer: None, body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), bearer: None, body: None }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }
}

/// Status plus raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// True for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The `error` field of a JSON body, when present.
    pub fn error_message(&self) -> Option<String> {
        self.json::<ErrorBody>().ok().and_then(|body| body.error)
    }

    /// Convert a non-2xx response into [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] carrying the server's `error` text.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(ApiError::Status { status: self.status, message: self.error_message() })
        }
    }
}

/// Sends one request and waits for its response.
///
/// There is no retry, timeout, or cancellation: a hung request simply never
/// resolves.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser `fetch` transport via `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base: String,
}

#[cfg(feature = "hydrate")]
impl Default for GlooTransport {
    fn default() -> Self {
        Self { base: api_base().to_owned() }
    }
}

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let url = format!("{}{}", self.base, request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in request_headers(&request) {
            builder = builder.header(name, value);
        }
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let prepared = match &request.body {
            Some(body) => builder.body(body.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
