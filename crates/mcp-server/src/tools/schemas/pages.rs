use rmcp::schemars;
use serde::Deserialize;

use super::lenient;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPageRequest {
    #[schemars(description = "Id of the page to fetch (string or number)", with = "String")]
    #[serde(deserialize_with = "lenient::text")]
    pub page_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreatePageRequest {
    #[schemars(description = "Key of the space that will hold the page (e.g. `ENG`)")]
    pub space_key: String,

    #[schemars(description = "Page title")]
    pub title: String,

    /// Body in storage format.
    #[schemars(description = "Page body in Confluence storage format (XHTML)")]
    pub content: String,

    #[schemars(
        description = "Id of the parent page; omit for a top-level page",
        with = "Option<String>"
    )]
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdatePageRequest {
    #[schemars(description = "Id of the page to update (string or number)", with = "String")]
    #[serde(deserialize_with = "lenient::text")]
    pub page_id: String,

    #[schemars(description = "New title (keeps the current title when omitted)")]
    #[serde(default)]
    pub title: Option<String>,

    #[schemars(description = "New body in storage format (keeps the current body when omitted)")]
    #[serde(default)]
    pub content: Option<String>,

    /// Replaces the computed `current + 1` version.
    #[schemars(
        description = "Explicit version number to submit instead of current version + 1 (string or number)",
        with = "Option<String>"
    )]
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub version_number: Option<String>,
}
