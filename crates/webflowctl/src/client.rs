//! CLI error type and the per-invocation API context.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use serde::Serialize;
use serde::de::DeserializeOwned;
use webflow_client::{ApiError, WebflowClient};

pub(crate) const TOKEN_ENV: &str = "WEBFLOW_API_TOKEN";

/// Exit status for input rejected before any request is sent.
pub(crate) const EXIT_INVALID_INPUT: i32 = 2;
/// Exit status for a failed API call or an unusable response.
pub(crate) const EXIT_REQUEST_FAILED: i32 = 3;

/// Failure of a single `webflowctl` invocation.
#[derive(Debug)]
pub(crate) enum CliError {
    /// Arguments or credentials were unusable; nothing was sent.
    Validation(String),
    /// The Webflow API call behind `action` failed.
    Api {
        action: &'static str,
        source: ApiError,
    },
    /// Any other failure, such as a JSON payload that does not decode.
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Attach the attempted action (`"delete webhook"`) to a client error.
    pub(crate) const fn api(action: &'static str, source: ApiError) -> Self {
        Self::Api { action, source }
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => EXIT_INVALID_INPUT,
            Self::Api { .. } | Self::Failure(_) => EXIT_REQUEST_FAILED,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => formatter.write_str(message),
            Self::Api { action, source } => write!(formatter, "unable to {action}: {source}"),
            Self::Failure(error) => write!(formatter, "{error:#}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Api { source, .. } => Some(source),
            Self::Failure(error) => Some(&**error),
        }
    }
}

/// Application context passed to command handlers.
#[derive(Debug, Clone)]
pub(crate) struct AppContext {
    pub(crate) client: WebflowClient,
}

impl AppContext {
    /// Build the context from the token supplied on the command line or environment.
    pub(crate) fn from_token(token: Option<&str>) -> CliResult<Self> {
        let token = parse_api_token(token)?;
        Ok(Self {
            client: WebflowClient::new(token),
        })
    }
}

/// Validate the API token provided to the CLI.
pub(crate) fn parse_api_token(input: Option<&str>) -> CliResult<String> {
    let token = input.map(str::trim).unwrap_or_default();
    if token.is_empty() {
        return Err(CliError::validation(format!(
            "missing API token: pass --api-token (-a) or set {TOKEN_ENV}"
        )));
    }
    Ok(token.to_string())
}

/// Decode a JSON response body, naming the payload on failure.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8], what: &str) -> CliResult<T> {
    serde_json::from_slice(body)
        .map_err(|err| CliError::failure(anyhow!("failed to parse {what}: {err}")))
}

/// Encode a request payload as JSON bytes.
pub(crate) fn encode_body<T: Serialize>(payload: &T, what: &str) -> CliResult<Vec<u8>> {
    serde_json::to_vec(payload)
        .map_err(|err| CliError::failure(anyhow!("failed to encode {what}: {err}")))
}
