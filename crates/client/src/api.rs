use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    CommentDraft, CommentQuery, Content, ContentDraft, ContentPage, ListOptions, SearchPage,
    SpacePage, SpaceQuery,
};

/// The subset of the Confluence REST API the tools rely on.
///
/// [`crate::ConfluenceClient`] is the HTTP implementation; tests substitute in-memory fakes.
#[async_trait]
pub trait ConfluenceApi: Send + Sync {
    /// `GET /search` with a CQL query.
    async fn search(&self, cql: &str, limit: i64) -> Result<SearchPage>;

    /// `GET /content/{id}`.
    async fn get_content(&self, id: &str, expand: &[&str]) -> Result<Content>;

    /// `GET /content/{id}/child/{type}`: one level below `id`.
    async fn children_by_type(
        &self,
        id: &str,
        content_type: &str,
        options: &ListOptions,
    ) -> Result<ContentPage>;

    /// `GET /content/{id}/descendant/{type}`: every level below `id`, direct children included.
    async fn descendants_by_type(
        &self,
        id: &str,
        content_type: &str,
        depth: &str,
        options: &ListOptions,
    ) -> Result<ContentPage>;

    /// `POST /content`.
    async fn create_content(&self, draft: &ContentDraft) -> Result<Content>;

    /// `PUT /content/{id}`. The server rejects stale versions with 409.
    async fn update_content(&self, id: &str, draft: &ContentDraft) -> Result<Content>;

    /// `GET /content/{id}/child/comment`.
    async fn comments(&self, page_id: &str, query: &CommentQuery) -> Result<ContentPage>;

    /// `POST /content/{id}/child/comment`.
    async fn create_comment(&self, page_id: &str, draft: &CommentDraft) -> Result<Content>;

    /// `GET /space`.
    async fn spaces(&self, query: &SpaceQuery) -> Result<SpacePage>;
}
