use super::super::ConfluenceService;
use crate::error::ToolError;
use crate::flows::spaces::{self, SpaceRequest};
use crate::flows::split_list;
use crate::tools::render::render;
use crate::tools::schemas::spaces::ListSpacesRequest;
use rmcp::model::CallToolResult;

pub(in crate::tools::dispatch) async fn list_spaces(
    service: &ConfluenceService,
    request: ListSpacesRequest,
) -> Result<CallToolResult, ToolError> {
    let query = SpaceRequest {
        start: request.start_at,
        limit: request.max_results,
        status: request.status,
        space_type: request.space_type,
        expand: split_list(request.expand.as_deref()),
    };
    let api = service.api()?;
    let listing = spaces::list_spaces(api.as_ref(), &query).await?;
    render(&listing)
}
