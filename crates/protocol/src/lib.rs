use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod records;

pub use records::{
    CommentCreated, CommentListing, CommentRecord, PageDetail, PageSummary, PageWriteResult,
    Pagination, SearchHit, SearchPageOutput, SearchSpaceOutput, SpaceHit, SpaceListing,
    SpaceRecord,
};

/// Stable error codes surfaced in [`ErrorEnvelope::code`].
pub mod codes {
    pub const CREDENTIALS_MISSING: &str = "credentials_missing";
    pub const FETCH_FAILED: &str = "fetch_failed";
    pub const UPDATE_FAILED: &str = "update_failed";
    pub const INVALID_REQUEST: &str = "invalid_request";
    pub const INTERNAL: &str = "internal";
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
