//! MCP tool dispatch for the Confluence service.

mod router;
mod service;
#[cfg(test)]
mod tests;

use confluence_client::{ClientProvider, ConfluenceApi};
use rmcp::handler::server::tool::ToolRouter;
use std::sync::Arc;

use crate::error::ToolError;

/// Confluence MCP service.
///
/// Holds no per-call state; the wiki client is built on the first call that needs it.
#[derive(Clone)]
pub struct ConfluenceService {
    tool_router: ToolRouter<Self>,
    provider: Arc<ClientProvider>,
}

impl ConfluenceService {
    pub(in crate::tools::dispatch) fn api(&self) -> Result<Arc<dyn ConfluenceApi>, ToolError> {
        Ok(self.provider.client()?)
    }
}
