use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// A failed call against the Confluence REST API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{body} (endpoint: {endpoint}, status: {status})")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Status { endpoint, .. }
            | Self::Transport { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when the server answered.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The server rejected a write because the submitted version was stale.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

/// The client handle could not be built. Cached by [`crate::ClientProvider`], so it is
/// returned again on every later call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("required credentials not set: {}", vars.join(", "))]
    Missing { vars: Vec<&'static str> },

    #[error("invalid Confluence host {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Http(String),
}
