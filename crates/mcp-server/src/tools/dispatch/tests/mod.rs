
use super::ConfluenceService;
use crate::test_support::FakeConfluence;
use confluence_client::ClientProvider;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use std::time::Duration;

fn service_with(fake: FakeConfluence) -> (ConfluenceService, Arc<FakeConfluence>) {
    let fake = Arc::new(fake);
    let provider = ClientProvider::ready(fake.clone());
    (ConfluenceService::new(Arc::new(provider)), fake)
}

fn service_without_credentials() -> ConfluenceService {
    let provider = ClientProvider::from_source(|_| None, Duration::from_secs(1));
    ConfluenceService::new(Arc::new(provider))
}

fn text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default()
}

fn error_code(result: &CallToolResult) -> Option<String> {
    result
        .structured_content
        .as_ref()
        .and_then(|v| v["error"]["code"].as_str())
        .map(str::to_string)
}
