// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod comments;
pub(super) mod error;
pub(super) mod pages;
pub(super) mod search;
pub(super) mod spaces;
mod tool_router;

use crate::error::ValidationError;
use rmcp::handler::server::tool::ToolRouter;

use super::ConfluenceService;

pub(super) fn build_tool_router() -> ToolRouter<ConfluenceService> {
    tool_router::build_tool_router()
}

/// Trimmed value of a required string argument; blank is rejected.
pub(super) fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(trimmed)
}
