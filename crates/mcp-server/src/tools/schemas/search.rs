use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchPageRequest {
    #[schemars(
        description = "CQL query, e.g. `type=page AND text ~ \"deploy\"` or `title = \"Runbook\"`. Returns at most 5 results."
    )]
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchSpaceRequest {
    /// Free text matched against space names and descriptions.
    #[schemars(description = "Text to look for in space names and descriptions")]
    pub query: String,
}
