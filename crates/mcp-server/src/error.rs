use confluence_client::{ApiError, CredentialError};
use confluence_protocol::{codes, ErrorEnvelope};
use serde_json::{json, Map, Value};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// A remote read (or create) failed.
#[derive(Error, Debug)]
#[error("failed to {action}: {source}")]
pub struct FetchError {
    pub action: &'static str,
    #[source]
    pub source: ApiError,
}

impl FetchError {
    pub fn new(action: &'static str, source: ApiError) -> Self {
        Self { action, source }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStage {
    FetchCurrent,
    ParseVersion,
    Submit,
}

impl UpdateStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FetchCurrent => "fetch-current",
            Self::ParseVersion => "parse-version",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for UpdateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The page update flow failed; [`UpdateError::stage`] names the step.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("failed to get current page: {0}")]
    FetchCurrent(#[source] ApiError),

    #[error("invalid version_number {value:?}: {source}")]
    ParseVersion {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to update page: {0}")]
    Submit(#[source] ApiError),
}

impl UpdateError {
    pub fn stage(&self) -> UpdateStage {
        match self {
            Self::FetchCurrent(_) => UpdateStage::FetchCurrent,
            Self::ParseVersion { .. } => UpdateStage::ParseVersion,
            Self::Submit(_) => UpdateStage::Submit,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::FetchCurrent(err) | Self::Submit(err) => Some(err),
            Self::ParseVersion { .. } => None,
        }
    }
}

/// A tool argument is missing or unusable. Raised before any remote call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            reason: "argument is required".to_string(),
        }
    }
}

/// Everything a tool handler can fail with.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("failed to initialize Confluence client: {0}")]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Update(#[from] UpdateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to render result: {0}")]
    Render(String),
}

impl ToolError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Credential(_) => codes::CREDENTIALS_MISSING,
            Self::Fetch(_) => codes::FETCH_FAILED,
            Self::Update(_) => codes::UPDATE_FAILED,
            Self::Validation(_) => codes::INVALID_REQUEST,
            Self::Render(_) => codes::INTERNAL,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let mut envelope = ErrorEnvelope::new(self.code(), self.to_string());

        let mut details = Map::new();
        let api_error = match self {
            Self::Fetch(err) => Some(&err.source),
            Self::Update(err) => {
                details.insert("stage".to_string(), json!(err.stage().as_str()));
                err.api_error()
            }
            Self::Validation(err) => {
                details.insert("field".to_string(), json!(err.field));
                None
            }
            Self::Credential(_) | Self::Render(_) => None,
        };
        if let Some(api_error) = api_error {
            details.insert("endpoint".to_string(), json!(api_error.endpoint()));
            if let Some(status) = api_error.status() {
                details.insert("status".to_string(), json!(status));
            }
            if let Some(body) = api_error.body() {
                details.insert("body".to_string(), json!(body));
            }
        }
        if !details.is_empty() {
            envelope = envelope.with_details(Value::Object(details));
        }

        match self {
            Self::Credential(_) => envelope.with_hint(
                "Set ATLASSIAN_HOST, ATLASSIAN_EMAIL and ATLASSIAN_TOKEN (or pass --env <file>) and restart the server",
            ),
            Self::Update(err)
                if err.api_error().is_some_and(ApiError::is_conflict) =>
            {
                envelope.with_hint(
                    "The page changed since it was read; call get_page for the current version and retry, or pass version_number",
                )
            }
            _ => envelope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict() -> ApiError {
        ApiError::Status {
            endpoint: "https://acme.atlassian.net/wiki/rest/api/content/42".to_string(),
            status: 409,
            body: "version conflict".to_string(),
        }
    }

    #[test]
    fn update_conflict_envelope_carries_stage_and_body() {
        let envelope = ToolError::from(UpdateError::Submit(conflict())).envelope();
        assert_eq!(envelope.code, "update_failed");
        let details = envelope.details.expect("details");
        assert_eq!(details["stage"], "submit");
        assert_eq!(details["status"], 409);
        assert_eq!(details["body"], "version conflict");
        assert!(envelope.hint.is_some());
    }

    #[test]
    fn parse_version_has_no_endpoint() {
        let source = "x".parse::<i64>().unwrap_err();
        let err = UpdateError::ParseVersion {
            value: "x".into(),
            source,
        };
        assert_eq!(err.stage(), UpdateStage::ParseVersion);
        let envelope = ToolError::from(err).envelope();
        let details = envelope.details.expect("details");
        assert_eq!(details["stage"], "parse-version");
        assert!(details.get("endpoint").is_none());
    }

    #[test]
    fn credential_error_points_at_configuration() {
        let err = ToolError::from(CredentialError::Missing {
            vars: vec!["ATLASSIAN_TOKEN"],
        });
        let envelope = err.envelope();
        assert_eq!(envelope.code, "credentials_missing");
        assert!(envelope.message.contains("ATLASSIAN_TOKEN"));
        assert!(envelope.hint.unwrap().contains("--env"));
    }
}
