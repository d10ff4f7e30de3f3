use super::super::ConfluenceService;
use super::required;
use crate::error::ToolError;
use crate::flows::search;
use crate::tools::render::render;
use crate::tools::schemas::search::{SearchPageRequest, SearchSpaceRequest};
use rmcp::model::CallToolResult;

pub(in crate::tools::dispatch) async fn search_page(
    service: &ConfluenceService,
    request: SearchPageRequest,
) -> Result<CallToolResult, ToolError> {
    let query = required("query", &request.query)?;
    let api = service.api()?;
    let output = search::search_pages(api.as_ref(), query).await?;
    render(&output)
}

pub(in crate::tools::dispatch) async fn search_space(
    service: &ConfluenceService,
    request: SearchSpaceRequest,
) -> Result<CallToolResult, ToolError> {
    let query = required("query", &request.query)?;
    let api = service.api()?;
    let output = search::search_spaces(api.as_ref(), query).await?;
    render(&output)
}
