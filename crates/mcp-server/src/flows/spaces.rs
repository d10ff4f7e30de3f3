//! Space listing.

use confluence_client::models::{Space, SpaceQuery};
use confluence_client::ConfluenceApi;
use confluence_protocol::{SpaceListing, SpaceRecord};

use crate::error::FetchError;

pub const DEFAULT_SPACE_LIMIT: i64 = 25;

/// Typed input of `list_spaces`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceRequest {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub space_type: Option<String>,
    pub expand: Vec<String>,
}

impl SpaceRequest {
    fn query(&self) -> SpaceQuery {
        SpaceQuery {
            start: self.start.unwrap_or(0).max(0),
            limit: self
                .limit
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_SPACE_LIMIT),
            status: super::non_empty(self.status.as_deref()).map(str::to_string),
            space_type: super::non_empty(self.space_type.as_deref()).map(str::to_string),
            expand: self.expand.clone(),
        }
    }
}

fn record(space: &Space) -> SpaceRecord {
    SpaceRecord {
        key: space.key.clone(),
        id: space.id,
        name: space.name.clone(),
        kind: space.kind.clone(),
        status: space.status.clone(),
        link: space.self_link().unwrap_or_default().to_string(),
    }
}

pub async fn list_spaces(
    api: &dyn ConfluenceApi,
    request: &SpaceRequest,
) -> Result<SpaceListing, FetchError> {
    let page = api
        .spaces(&request.query())
        .await
        .map_err(|err| FetchError::new("get spaces", err))?;

    let spaces: Vec<SpaceRecord> = page.results.iter().map(record).collect();
    let message = if spaces.is_empty() {
        "No spaces found".to_string()
    } else {
        format!("Found {} spaces", spaces.len())
    };
    Ok(SpaceListing {
        space_count: spaces.len(),
        spaces,
        message,
    })
}
