use super::{router, ConfluenceService};
use confluence_client::ClientProvider;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};
use std::sync::Arc;

const INSTRUCTIONS: &str = "Confluence tools. Find pages with `search_page` (CQL) and spaces with \
`search_space` or `list_spaces`. `get_page` returns the body plus direct children and other \
descendants. `update_page` reads the current version and submits the next one; on a version \
conflict call `get_page` again or pass `version_number`. Bodies are Confluence storage format (XHTML).";

impl ConfluenceService {
    pub fn new(provider: Arc<ClientProvider>) -> Self {
        Self {
            tool_router: router::build_tool_router(),
            provider,
        }
    }

    /// Service reading credentials from the process environment on first use.
    pub fn from_env() -> Self {
        Self::new(Arc::new(ClientProvider::from_env()))
    }
}

#[tool_handler]
impl ServerHandler for ConfluenceService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
