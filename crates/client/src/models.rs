//! Confluence REST (v1) payloads.
//!
//! Response types are lenient: every field defaults, because the server omits whatever was
//! not requested through `expand`.

use serde::{Deserialize, Serialize};

pub const STORAGE_REPRESENTATION: &str = "storage";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Space>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<Content>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Content {
    pub fn version_number(&self) -> Option<i64> {
        self.version.as_ref().map(|v| v.number)
    }

    pub fn self_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.self_link.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    pub number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<BodyNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<BodyNode>,
}

impl Body {
    /// A body carrying `value` in the storage representation.
    pub fn storage(value: impl Into<String>) -> Self {
        Self {
            storage: Some(BodyNode {
                value: value.into(),
                representation: STORAGE_REPRESENTATION.to_string(),
            }),
            view: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyNode {
    pub value: String,
    pub representation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webui: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    pub id: i64,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Space {
    pub fn self_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.self_link.as_deref())
    }
}

/// One page of a paginated content listing (children, descendants, comments).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentPage {
    pub results: Vec<Content>,
    pub start: i64,
    pub limit: i64,
    pub size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacePage {
    pub results: Vec<Space>,
    pub start: i64,
    pub limit: i64,
    pub size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    pub content: Option<Content>,
    pub space: Option<Space>,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub last_modified: String,
    pub entity_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    pub start: i64,
    pub limit: i64,
    pub size: i64,
    pub total_size: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AncestorRef {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionRef {
    pub number: i64,
}

/// Request body for creating or updating a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<SpaceRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<AncestorRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionRef>,
}

/// Request body for a new comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub body: Body,
}

impl CommentDraft {
    pub fn storage(content: impl Into<String>) -> Self {
        Self {
            kind: "comment".to_string(),
            body: Body::storage(content),
        }
    }
}

/// `expand` / pagination parameters shared by listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub expand: Vec<String>,
    pub start: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentQuery {
    pub expand: Vec<String>,
    pub location: Vec<String>,
    pub start: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceQuery {
    pub start: i64,
    pub limit: i64,
    pub status: Option<String>,
    pub space_type: Option<String>,
    pub expand: Vec<String>,
}
