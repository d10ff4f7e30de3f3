//! Page comments: paginated listing and creation.

use confluence_client::models::{CommentDraft, CommentQuery, Content};
use confluence_client::ConfluenceApi;
use confluence_protocol::{CommentCreated, CommentListing, CommentRecord, Pagination};

use crate::error::FetchError;

pub const DEFAULT_COMMENT_LIMIT: i64 = 50;
const DEFAULT_COMMENT_EXPAND: [&str; 2] = ["body.view", "version"];

/// Typed input of `get_comments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRequest {
    pub page_id: String,
    pub start_at: Option<i64>,
    pub max_results: Option<i64>,
    /// Empty means the default expansion.
    pub expand: Vec<String>,
    pub location: Vec<String>,
}

impl CommentRequest {
    fn query(&self) -> CommentQuery {
        let expand = if self.expand.is_empty() {
            DEFAULT_COMMENT_EXPAND.iter().map(|e| e.to_string()).collect()
        } else {
            self.expand.clone()
        };
        CommentQuery {
            expand,
            location: self.location.clone(),
            start: self.start_at.unwrap_or(0).max(0),
            limit: self
                .max_results
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_COMMENT_LIMIT),
        }
    }
}

fn record(comment: &Content) -> CommentRecord {
    let version = comment.version.as_ref();
    CommentRecord {
        id: comment.id.clone(),
        title: comment.title.clone(),
        status: comment.status.clone(),
        author: version
            .and_then(|v| v.by.as_ref())
            .map(|user| user.display_name.clone()),
        created: version.and_then(|v| v.when.clone()),
        content: comment
            .body
            .as_ref()
            .and_then(|b| b.view.as_ref())
            .map(|node| node.value.clone()),
    }
}

pub async fn get_comments(
    api: &dyn ConfluenceApi,
    request: &CommentRequest,
) -> Result<CommentListing, FetchError> {
    let query = request.query();
    let page = api
        .comments(&request.page_id, &query)
        .await
        .map_err(|err| FetchError::new("get comments", err))?;

    let comments: Vec<CommentRecord> = page.results.iter().map(record).collect();
    let message = if comments.is_empty() {
        "No comments found.".to_string()
    } else {
        format!("Retrieved {} comments.", comments.len())
    };
    Ok(CommentListing {
        page_id: request.page_id.clone(),
        pagination: Pagination {
            start_at: query.start,
            max_results: query.limit,
            returned: comments.len(),
            size: page.size,
            page: query.start / query.limit + 1,
        },
        comments,
        message,
    })
}

pub async fn create_comment(
    api: &dyn ConfluenceApi,
    page_id: &str,
    content: &str,
) -> Result<CommentCreated, FetchError> {
    let created = api
        .create_comment(page_id, &CommentDraft::storage(content))
        .await
        .map_err(|err| FetchError::new("create comment", err))?;
    Ok(CommentCreated {
        link: created.self_link().unwrap_or_default().to_string(),
        id: created.id,
        message: "Comment created successfully!".to_string(),
    })
}
