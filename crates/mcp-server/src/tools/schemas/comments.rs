use rmcp::schemars;
use serde::Deserialize;

use super::lenient;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCommentsRequest {
    #[schemars(description = "Id of the page whose comments are listed (string or number)", with = "String")]
    #[serde(deserialize_with = "lenient::text")]
    pub page_id: String,

    #[schemars(description = "Comma-separated expansions (default: `body.view,version`)")]
    #[serde(default)]
    pub expand: Option<String>,

    #[schemars(description = "Comma-separated comment locations: `inline`, `footer`, `resolved`")]
    #[serde(default)]
    pub location: Option<String>,

    #[schemars(description = "Offset of the first comment (default: 0)", with = "Option<i64>")]
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub start_at: Option<i64>,

    #[schemars(description = "Page size (default: 50)", with = "Option<i64>")]
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub max_results: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateCommentRequest {
    #[schemars(description = "Id of the page to comment on (string or number)", with = "String")]
    #[serde(deserialize_with = "lenient::text")]
    pub page_id: String,

    #[schemars(description = "Comment body in Confluence storage format (XHTML)")]
    pub content: String,
}
