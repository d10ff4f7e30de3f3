use rmcp::schemars;
use serde::Deserialize;

use super::lenient;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListSpacesRequest {
    #[schemars(description = "Offset of the first space (default: 0)", with = "Option<i64>")]
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub start_at: Option<i64>,

    #[schemars(description = "Page size (default: 25)", with = "Option<i64>")]
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub max_results: Option<i64>,

    #[schemars(description = "Space status filter: `current` or `archived`")]
    #[serde(default)]
    pub status: Option<String>,

    #[schemars(description = "Space type filter: `global` or `personal`")]
    #[serde(default)]
    pub space_type: Option<String>,

    #[schemars(description = "Comma-separated expansions (e.g. `description.plain,homepage`)")]
    #[serde(default)]
    pub expand: Option<String>,
}
