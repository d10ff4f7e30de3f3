use super::super::ConfluenceService;
use super::error::respond;
use crate::tools::schemas::comments::{CreateCommentRequest, GetCommentsRequest};
use crate::tools::schemas::pages::{CreatePageRequest, GetPageRequest, UpdatePageRequest};
use crate::tools::schemas::search::{SearchPageRequest, SearchSpaceRequest};
use crate::tools::schemas::spaces::ListSpacesRequest;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::{tool, tool_router, ErrorData as McpError};

pub(super) fn build_tool_router() -> ToolRouter<ConfluenceService> {
    ConfluenceService::tool_router()
}

#[tool_router]
impl ConfluenceService {
    #[tool(description = "Search Confluence content with a CQL query. Returns up to 5 hits.")]
    pub async fn search_page(
        &self,
        Parameters(request): Parameters<SearchPageRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            "search_page",
            super::search::search_page(self, request).await,
        ))
    }

    #[tool(description = "Find spaces whose name or description matches the given text.")]
    pub async fn search_space(
        &self,
        Parameters(request): Parameters<SearchSpaceRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            "search_space",
            super::search::search_space(self, request).await,
        ))
    }

    /// Page body plus its hierarchy.
    #[tool(
        description = "Get a page with its body, its direct child pages and all other descendant pages."
    )]
    pub async fn get_page(
        &self,
        Parameters(request): Parameters<GetPageRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond("get_page", super::pages::get_page(self, request).await))
    }

    #[tool(description = "Create a page in a space, optionally under a parent page.")]
    pub async fn create_page(
        &self,
        Parameters(request): Parameters<CreatePageRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            "create_page",
            super::pages::create_page(self, request).await,
        ))
    }

    /// Read-modify-write under the server's version check.
    #[tool(
        description = "Update a page's title and/or body. The next version is computed from the current one; a concurrent edit is reported as a conflict."
    )]
    pub async fn update_page(
        &self,
        Parameters(request): Parameters<UpdatePageRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            "update_page",
            super::pages::update_page(self, request).await,
        ))
    }

    #[tool(description = "List the comments of a page, paginated.")]
    pub async fn get_comments(
        &self,
        Parameters(request): Parameters<GetCommentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            "get_comments",
            super::comments::get_comments(self, request).await,
        ))
    }

    #[tool(description = "Add a footer comment to a page.")]
    pub async fn create_comment(
        &self,
        Parameters(request): Parameters<CreateCommentRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            "create_comment",
            super::comments::create_comment(self, request).await,
        ))
    }

    #[tool(description = "List spaces, optionally filtered by status and type.")]
    pub async fn list_spaces(
        &self,
        Parameters(request): Parameters<ListSpacesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            "list_spaces",
            super::spaces::list_spaces(self, request).await,
        ))
    }
}
