//! Error types for Webflow API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by [`crate::WebflowClient`].
///
/// None of these are retried; the caller decides whether to abort.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The method, URL, and headers could not be turned into a request.
    #[error("failed to build request for '{url}'")]
    RequestBuild {
        /// URL the request was aimed at.
        url: String,
        /// Underlying builder failure (invalid URL or header value).
        #[source]
        source: reqwest::Error,
    },
    /// Sending the request failed (connection, DNS, TLS).
    #[error("request failed")]
    Transport {
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The response body could not be read to the end.
    #[error("failed to read response body")]
    BodyRead {
        /// Underlying stream error.
        #[source]
        source: reqwest::Error,
    },
    /// The API answered with a status outside `200..=204`.
    #[error("request failed: {status}\n{body}")]
    Status {
        /// Status returned by the API.
        status: StatusCode,
        /// Raw response body, usually a JSON error document.
        body: String,
    },
}

impl ApiError {
    /// HTTP status for responses rejected by the API.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::RequestBuild { .. } | Self::Transport { .. } | Self::BodyRead { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn status_error_embeds_status_line_and_body() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"msg":"not found"}"#.to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404 Not Found"));
        assert!(message.contains(r#"{"msg":"not found"}"#));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn request_build_error_keeps_source() {
        let Err(source) = reqwest::Client::new().get("not a url").build() else {
            panic!("expected builder failure");
        };
        let err = ApiError::RequestBuild {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().contains("not a url"));
        assert!(err.source().is_some());
        assert!(err.status().is_none());
    }
}
