use super::super::ConfluenceService;
use super::required;
use crate::error::ToolError;
use crate::flows::hierarchy::list_page_with_descendants;
use crate::flows::pages::{self, NewPage};
use crate::flows::update::{self, PageUpdate};
use crate::tools::render::render;
use crate::tools::schemas::pages::{CreatePageRequest, GetPageRequest, UpdatePageRequest};
use rmcp::model::CallToolResult;

pub(in crate::tools::dispatch) async fn get_page(
    service: &ConfluenceService,
    request: GetPageRequest,
) -> Result<CallToolResult, ToolError> {
    let page_id = required("page_id", &request.page_id)?;
    let api = service.api()?;
    let detail = list_page_with_descendants(api.as_ref(), page_id).await?;
    render(&detail)
}

pub(in crate::tools::dispatch) async fn create_page(
    service: &ConfluenceService,
    request: CreatePageRequest,
) -> Result<CallToolResult, ToolError> {
    let page = NewPage {
        space_key: required("space_key", &request.space_key)?.to_string(),
        title: required("title", &request.title)?.to_string(),
        content: required("content", &request.content)?.to_string(),
        parent_id: request.parent_id,
    };
    let api = service.api()?;
    let created = pages::create_page(api.as_ref(), &page).await?;
    render(&created)
}

pub(in crate::tools::dispatch) async fn update_page(
    service: &ConfluenceService,
    request: UpdatePageRequest,
) -> Result<CallToolResult, ToolError> {
    let update = PageUpdate {
        page_id: required("page_id", &request.page_id)?.to_string(),
        title: request.title,
        content: request.content,
        version_number: request.version_number,
    };
    let api = service.api()?;
    let updated = update::update_page(api.as_ref(), &update).await?;
    render(&updated)
}
