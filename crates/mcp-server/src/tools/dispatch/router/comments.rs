use super::super::ConfluenceService;
use super::required;
use crate::error::ToolError;
use crate::flows::comments::{self, CommentRequest};
use crate::flows::split_list;
use crate::tools::render::render;
use crate::tools::schemas::comments::{CreateCommentRequest, GetCommentsRequest};
use rmcp::model::CallToolResult;

pub(in crate::tools::dispatch) async fn get_comments(
    service: &ConfluenceService,
    request: GetCommentsRequest,
) -> Result<CallToolResult, ToolError> {
    let query = CommentRequest {
        page_id: required("page_id", &request.page_id)?.to_string(),
        start_at: request.start_at,
        max_results: request.max_results,
        expand: split_list(request.expand.as_deref()),
        location: split_list(request.location.as_deref()),
    };
    let api = service.api()?;
    let listing = comments::get_comments(api.as_ref(), &query).await?;
    render(&listing)
}

pub(in crate::tools::dispatch) async fn create_comment(
    service: &ConfluenceService,
    request: CreateCommentRequest,
) -> Result<CallToolResult, ToolError> {
    let page_id = required("page_id", &request.page_id)?;
    let content = required("content", &request.content)?;
    let api = service.api()?;
    let created = comments::create_comment(api.as_ref(), page_id, content).await?;
    render(&created)
}
