//! Optimistic-concurrency page update.
//!
//! Every call re-reads the current version; the server enforces the lock and answers a
//! stale version with a conflict, which is surfaced as [`UpdateError::Submit`] and never
//! retried here.

use confluence_client::models::{Body, ContentDraft, VersionRef};
use confluence_client::ConfluenceApi;
use confluence_protocol::PageWriteResult;

use super::{non_empty, page_write_result};
use crate::error::UpdateError;

/// Typed input of `update_page`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUpdate {
    pub page_id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Forces the submitted version instead of `current + 1`.
    pub version_number: Option<String>,
}

pub async fn update_page(
    api: &dyn ConfluenceApi,
    update: &PageUpdate,
) -> Result<PageWriteResult, UpdateError> {
    let current = api
        .get_content(&update.page_id, &["version"])
        .await
        .map_err(UpdateError::FetchCurrent)?;

    let mut version = current.version_number().map_or(1, |number| number + 1);
    if let Some(raw) = non_empty(update.version_number.as_deref()) {
        version = raw
            .parse::<i64>()
            .map_err(|source| UpdateError::ParseVersion {
                value: raw.to_string(),
                source,
            })?;
    }

    let draft = ContentDraft {
        id: Some(update.page_id.clone()),
        kind: "page".to_string(),
        title: non_empty(update.title.as_deref())
            .map(str::to_string)
            .unwrap_or(current.title),
        space: None,
        ancestors: Vec::new(),
        body: non_empty(update.content.as_deref()).map(Body::storage),
        version: Some(VersionRef { number: version }),
    };

    log::debug!("updating page {} to version {version}", update.page_id);
    let updated = api
        .update_content(&update.page_id, &draft)
        .await
        .map_err(UpdateError::Submit)?;

    Ok(page_write_result(&updated, "Page updated successfully!"))
}
