//! Page creation.

use confluence_client::models::{AncestorRef, Body, ContentDraft, SpaceRef};
use confluence_client::ConfluenceApi;
use confluence_protocol::PageWriteResult;

use super::{non_empty, page_write_result};
use crate::error::FetchError;

/// Typed input of `create_page`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPage {
    pub space_key: String,
    pub title: String,
    pub content: String,
    pub parent_id: Option<String>,
}

impl NewPage {
    fn draft(&self) -> ContentDraft {
        ContentDraft {
            id: None,
            kind: "page".to_string(),
            title: self.title.clone(),
            space: Some(SpaceRef {
                key: self.space_key.clone(),
            }),
            ancestors: non_empty(self.parent_id.as_deref())
                .map(|id| vec![AncestorRef { id: id.to_string() }])
                .unwrap_or_default(),
            body: Some(Body::storage(self.content.clone())),
            version: None,
        }
    }
}

pub async fn create_page(
    api: &dyn ConfluenceApi,
    page: &NewPage,
) -> Result<PageWriteResult, FetchError> {
    let created = api
        .create_content(&page.draft())
        .await
        .map_err(|err| FetchError::new("create page", err))?;
    log::debug!("created page {} in space {}", created.id, page.space_key);
    Ok(page_write_result(&created, "Page created successfully!"))
}
