//! Records returned by the tool surface.
//!
//! These are transient projections of remote wiki entities; nothing here is persisted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchHit {
    pub title: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub link: String,
    pub last_modified: String,
    pub excerpt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchPageOutput {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub result_count: usize,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SpaceHit {
    pub name: String,
    pub key: String,
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchSpaceOutput {
    pub query: String,
    pub spaces: Vec<SpaceHit>,
    pub result_count: usize,
    pub message: String,
}

/// Listing projection of a page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct PageSummary {
    pub title: String,
    pub id: String,
    pub version: i64,
}

/// A page together with its hierarchy.
///
/// `all_descendants` holds only the descendants that are *not* direct children, so every
/// page is reported in exactly one of the two sections.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct PageDetail {
    pub title: String,
    pub id: String,
    pub version: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub direct_children: Vec<PageSummary>,
    pub all_descendants: Vec<PageSummary>,
    pub message: String,
    /// Non-fatal problems hit while collecting the hierarchy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Outcome of a page create or update.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct PageWriteResult {
    pub title: String,
    pub id: String,
    pub version: i64,
    pub link: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct CommentRecord {
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct Pagination {
    pub start_at: i64,
    pub max_results: i64,
    pub returned: usize,
    /// Result count reported by the server for this page.
    pub size: i64,
    /// 1-based page number, `start_at / max_results + 1`.
    pub page: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct CommentListing {
    pub page_id: String,
    pub comments: Vec<CommentRecord>,
    pub pagination: Pagination,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct CommentCreated {
    pub id: String,
    pub link: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SpaceRecord {
    pub key: String,
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SpaceListing {
    pub spaces: Vec<SpaceRecord>,
    pub space_count: usize,
    pub message: String,
}
