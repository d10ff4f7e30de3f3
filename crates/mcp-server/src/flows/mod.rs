//! Tool flows: each takes a [`confluence_client::ConfluenceApi`] and typed input and returns
//! a record from `confluence_protocol`.

pub mod comments;
pub mod hierarchy;
pub mod pages;
pub mod search;
pub mod spaces;
pub mod update;

use confluence_client::models::Content;
use confluence_protocol::PageWriteResult;

/// Trimmed value, or `None` when absent or blank.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Splits a comma-separated argument (`"a, b"` -> `["a", "b"]`).
pub(crate) fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn page_write_result(content: &Content, message: &str) -> PageWriteResult {
    PageWriteResult {
        title: content.title.clone(),
        id: content.id.clone(),
        version: content.version_number().unwrap_or(0),
        link: content.self_link().unwrap_or_default().to_string(),
        message: message.to_string(),
    }
}
