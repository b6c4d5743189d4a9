#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Minimal authenticated access to the Webflow v2 REST API.
//!
//! Every call is a single request/response exchange: the URL is composed from
//! path segments under a fixed base, the bearer token and JSON headers are
//! attached, and the response is read in full before being classified. Bodies
//! are returned as raw bytes; decoding is left to the caller.

mod error;

use std::fmt::{self, Debug, Formatter};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};

pub use error::{ApiError, ApiResult};
pub use reqwest::StatusCode;

/// Base URL of the Webflow v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.webflow.com/v2";

const APPLICATION_JSON: &str = "application/json";

/// HTTP client bound to one bearer token.
///
/// The token and transport are fixed at construction. Cloning shares the
/// underlying connection pool.
#[derive(Clone)]
pub struct WebflowClient {
    http: Client,
    base_url: String,
    token: String,
}

impl WebflowClient {
    /// Create a client for the public Webflow API.
    ///
    /// The token is not validated here; callers reject empty tokens upstream.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client rooted at a different base URL.
    #[must_use]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// Base URL every request is composed under.
    #[must_use]
    pub const fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Join path segments under the base URL.
    ///
    /// Segments are inserted verbatim; callers pass URL-safe values.
    #[must_use]
    pub fn build_url(&self, segments: &[&str]) -> String {
        if segments.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url, segments.join("/"))
    }

    /// Send a `GET` request.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be built or sent, when the body cannot be
    /// read, or when the status is outside `200..=204`.
    pub async fn get(&self, segments: &[&str]) -> ApiResult<Vec<u8>> {
        self.execute(Method::GET, segments, None).await
    }

    /// Send a `POST` request with an optional JSON payload.
    ///
    /// `None` sends an empty body.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be built or sent, when the body cannot be
    /// read, or when the status is outside `200..=204`.
    pub async fn post(&self, segments: &[&str], payload: Option<Vec<u8>>) -> ApiResult<Vec<u8>> {
        self.execute(Method::POST, segments, payload).await
    }

    /// Send a `DELETE` request.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be built or sent, when the body cannot be
    /// read, or when the status is outside `200..=204`.
    pub async fn delete(&self, segments: &[&str]) -> ApiResult<Vec<u8>> {
        self.execute(Method::DELETE, segments, None).await
    }

    async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        payload: Option<Vec<u8>>,
    ) -> ApiResult<Vec<u8>> {
        let url = self.build_url(segments);

        let mut builder = self
            .http
            .request(method.clone(), url.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON);
        if let Some(body) = payload {
            builder = builder.body(body);
        }
        let request = builder
            .build()
            .map_err(|source| ApiError::RequestBuild {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(method = %method, url = %url, "sending webflow request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport { source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::BodyRead { source })?;

        tracing::debug!(status = %status, bytes = body.len(), "received webflow response");

        if !is_success(status) {
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}

impl Debug for WebflowClient {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WebflowClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

const fn is_success(status: StatusCode) -> bool {
    matches!(status.as_u16(), 200..=204)
}
