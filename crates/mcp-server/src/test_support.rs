//! In-memory [`ConfluenceApi`] used by flow and dispatch tests.

use async_trait::async_trait;
use confluence_client::models::{
    Body, BodyNode, CommentDraft, CommentQuery, Content, ContentDraft, ContentPage, Links,
    ListOptions, SearchPage, SearchResult, Space, SpacePage, SpaceQuery, Version,
};
use confluence_client::{ApiError, ConfluenceApi, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub(crate) const FAKE_HOST: &str = "https://wiki.test";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Search { cql: String, limit: i64 },
    GetContent { id: String, expand: Vec<String> },
    Children { id: String, options: ListOptions },
    Descendants { id: String, depth: String, options: ListOptions },
    Create(ContentDraft),
    Update { id: String, draft: ContentDraft },
    Comments { page_id: String, query: CommentQuery },
    CreateComment { page_id: String, draft: CommentDraft },
    Spaces(SpaceQuery),
}

impl Call {
    pub(crate) fn is_write(&self) -> bool {
        matches!(
            self,
            Self::Create(_) | Self::Update { .. } | Self::CreateComment { .. }
        )
    }
}

#[derive(Default)]
pub(crate) struct FakeConfluence {
    pages: HashMap<String, Content>,
    children: HashMap<String, Vec<Content>>,
    descendants: HashMap<String, Vec<Content>>,
    failing: HashSet<&'static str>,
    update_rejection: Option<(u16, String)>,
    search_results: Vec<SearchResult>,
    comments: Vec<Content>,
    spaces: Vec<Space>,
    calls: Mutex<Vec<Call>>,
}

pub(crate) fn page(id: &str, title: &str, version: i64) -> Content {
    Content {
        id: id.to_string(),
        kind: "page".to_string(),
        status: "current".to_string(),
        title: title.to_string(),
        version: Some(Version {
            number: version,
            ..Version::default()
        }),
        links: Some(Links {
            self_link: Some(content_link(id)),
            ..Links::default()
        }),
        ..Content::default()
    }
}

pub(crate) fn with_body(mut content: Content, storage: &str, view: &str) -> Content {
    let node = |value: &str, representation: &str| {
        Some(BodyNode {
            value: value.to_string(),
            representation: representation.to_string(),
        })
    };
    content.body = Some(Body {
        storage: node(storage, "storage"),
        view: node(view, "view"),
    });
    content
}

pub(crate) fn content_link(id: &str) -> String {
    format!("{FAKE_HOST}/wiki/rest/api/content/{id}")
}

fn server_error(endpoint: String) -> ApiError {
    ApiError::Status {
        endpoint,
        status: 500,
        body: "internal server error".to_string(),
    }
}

impl FakeConfluence {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(mut self, content: Content) -> Self {
        self.pages.insert(content.id.clone(), content);
        self
    }

    pub(crate) fn with_children(mut self, parent: &str, children: Vec<Content>) -> Self {
        self.children.insert(parent.to_string(), children);
        self
    }

    pub(crate) fn with_descendants(mut self, parent: &str, descendants: Vec<Content>) -> Self {
        self.descendants.insert(parent.to_string(), descendants);
        self
    }

    /// Makes `operation` (`"children"`, `"descendants"`, `"search"`, ...) answer with a 500.
    pub(crate) fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub(crate) fn rejecting_updates(mut self, status: u16, body: &str) -> Self {
        self.update_rejection = Some((status, body.to_string()));
        self
    }

    pub(crate) fn with_search_results(mut self, results: Vec<SearchResult>) -> Self {
        self.search_results = results;
        self
    }

    pub(crate) fn with_comments(mut self, comments: Vec<Content>) -> Self {
        self.comments = comments;
        self
    }

    pub(crate) fn with_spaces(mut self, spaces: Vec<Space>) -> Self {
        self.spaces = spaces;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, operation: &'static str, endpoint: String) -> Result<()> {
        if self.failing.contains(operation) {
            return Err(server_error(endpoint));
        }
        Ok(())
    }

    fn echo(id: &str, draft: &ContentDraft) -> Content {
        Content {
            id: id.to_string(),
            kind: draft.kind.clone(),
            status: "current".to_string(),
            title: draft.title.clone(),
            version: Some(Version {
                number: draft.version.map(|v| v.number).unwrap_or(1),
                ..Version::default()
            }),
            body: draft.body.clone(),
            links: Some(Links {
                self_link: Some(content_link(id)),
                ..Links::default()
            }),
            ..Content::default()
        }
    }
}

#[async_trait]
impl ConfluenceApi for FakeConfluence {
    async fn search(&self, cql: &str, limit: i64) -> Result<SearchPage> {
        self.record(Call::Search {
            cql: cql.to_string(),
            limit,
        });
        self.check("search", format!("{FAKE_HOST}/wiki/rest/api/search"))?;
        Ok(SearchPage {
            size: self.search_results.len() as i64,
            results: self.search_results.clone(),
            ..SearchPage::default()
        })
    }

    async fn get_content(&self, id: &str, expand: &[&str]) -> Result<Content> {
        self.record(Call::GetContent {
            id: id.to_string(),
            expand: expand.iter().map(|e| e.to_string()).collect(),
        });
        self.check("get_content", content_link(id))?;
        self.pages.get(id).cloned().ok_or_else(|| ApiError::Status {
            endpoint: content_link(id),
            status: 404,
            body: format!(r#"{{"message":"No content found with id: {id}"}}"#),
        })
    }

    async fn children_by_type(
        &self,
        id: &str,
        _content_type: &str,
        options: &ListOptions,
    ) -> Result<ContentPage> {
        self.record(Call::Children {
            id: id.to_string(),
            options: options.clone(),
        });
        self.check("children", format!("{}/child/page", content_link(id)))?;
        let results = self.children.get(id).cloned().unwrap_or_default();
        Ok(ContentPage {
            size: results.len() as i64,
            results,
            ..ContentPage::default()
        })
    }

    async fn descendants_by_type(
        &self,
        id: &str,
        _content_type: &str,
        depth: &str,
        options: &ListOptions,
    ) -> Result<ContentPage> {
        self.record(Call::Descendants {
            id: id.to_string(),
            depth: depth.to_string(),
            options: options.clone(),
        });
        self.check("descendants", format!("{}/descendant/page", content_link(id)))?;
        let results = self.descendants.get(id).cloned().unwrap_or_default();
        Ok(ContentPage {
            size: results.len() as i64,
            results,
            ..ContentPage::default()
        })
    }

    async fn create_content(&self, draft: &ContentDraft) -> Result<Content> {
        self.record(Call::Create(draft.clone()));
        self.check("create", format!("{FAKE_HOST}/wiki/rest/api/content"))?;
        Ok(Self::echo("new-1", draft))
    }

    async fn update_content(&self, id: &str, draft: &ContentDraft) -> Result<Content> {
        self.record(Call::Update {
            id: id.to_string(),
            draft: draft.clone(),
        });
        if let Some((status, body)) = &self.update_rejection {
            return Err(ApiError::Status {
                endpoint: content_link(id),
                status: *status,
                body: body.clone(),
            });
        }
        Ok(Self::echo(id, draft))
    }

    async fn comments(&self, page_id: &str, query: &CommentQuery) -> Result<ContentPage> {
        self.record(Call::Comments {
            page_id: page_id.to_string(),
            query: query.clone(),
        });
        self.check("comments", format!("{}/child/comment", content_link(page_id)))?;
        Ok(ContentPage {
            size: self.comments.len() as i64,
            results: self.comments.clone(),
            start: query.start,
            limit: query.limit,
        })
    }

    async fn create_comment(&self, page_id: &str, draft: &CommentDraft) -> Result<Content> {
        self.record(Call::CreateComment {
            page_id: page_id.to_string(),
            draft: draft.clone(),
        });
        self.check(
            "create_comment",
            format!("{}/child/comment", content_link(page_id)),
        )?;
        Ok(Content {
            id: "comment-1".to_string(),
            kind: "comment".to_string(),
            links: Some(Links {
                self_link: Some(content_link("comment-1")),
                ..Links::default()
            }),
            ..Content::default()
        })
    }

    async fn spaces(&self, query: &SpaceQuery) -> Result<SpacePage> {
        self.record(Call::Spaces(query.clone()));
        self.check("spaces", format!("{FAKE_HOST}/wiki/rest/api/space"))?;
        Ok(SpacePage {
            size: self.spaces.len() as i64,
            results: self.spaces.clone(),
            start: query.start,
            limit: query.limit,
        })
    }
}
