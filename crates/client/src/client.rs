use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::ConfluenceApi;
use crate::credentials::Credentials;
use crate::error::{ApiError, CredentialError, Result};
use crate::models::{
    CommentDraft, CommentQuery, Content, ContentDraft, ContentPage, ListOptions, SearchPage,
    SpacePage, SpaceQuery,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_PATH: [&str; 3] = ["wiki", "rest", "api"];

/// HTTP implementation of [`ConfluenceApi`] authenticating every request with basic auth.
///
/// Construction performs no I/O; bad credentials only surface on the first real call.
#[derive(Clone)]
pub struct ConfluenceClient {
    http: reqwest::Client,
    base: Url,
    email: String,
    token: String,
}

impl std::fmt::Debug for ConfluenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfluenceClient")
            .field("base", &self.base.as_str())
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl ConfluenceClient {
    pub fn new(credentials: Credentials) -> std::result::Result<Self, CredentialError> {
        Self::with_timeout(credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        credentials: Credentials,
        timeout: Duration,
    ) -> std::result::Result<Self, CredentialError> {
        let base = normalize_host(&credentials.host)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("confluence-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| CredentialError::Http(err.to_string()))?;
        Ok(Self {
            http,
            base,
            email: credentials.email,
            token: credentials.token,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    pub fn account(&self) -> &str {
        &self.email
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `normalize_host` rejects cannot-be-a-base URLs, so this always applies.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(API_PATH).extend(segments);
        }
        url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments);
        let request = self.http.get(url.clone()).query(query);
        self.execute(url, request).await
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        let request = self.http.request(method, url.clone()).json(body);
        self.execute(url, request).await
    }

    async fn execute<T: DeserializeOwned>(&self, url: Url, request: RequestBuilder) -> Result<T> {
        let endpoint = url.to_string();
        log::debug!("confluence request: {endpoint}");

        let response = request
            .basic_auth(&self.email, Some(&self.token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !status.is_success() {
            log::debug!("confluence request {endpoint} rejected with {status}");
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

fn normalize_host(raw: &str) -> std::result::Result<Url, CredentialError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let invalid = |reason: String| CredentialError::InvalidHost {
        host: raw.to_string(),
        reason,
    };
    let url = Url::parse(&candidate).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

fn push_expand(query: &mut Vec<(&'static str, String)>, expand: &[String]) {
    let expand: Vec<&str> = expand
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect();
    if !expand.is_empty() {
        query.push(("expand", expand.join(",")));
    }
}

fn list_query(options: &ListOptions) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    push_expand(&mut query, &options.expand);
    query.push(("start", options.start.to_string()));
    query.push(("limit", options.limit.to_string()));
    query
}

#[async_trait]
impl ConfluenceApi for ConfluenceClient {
    async fn search(&self, cql: &str, limit: i64) -> Result<SearchPage> {
        let query = [("cql", cql.to_string()), ("limit", limit.to_string())];
        self.get(&["search"], &query).await
    }

    async fn get_content(&self, id: &str, expand: &[&str]) -> Result<Content> {
        let mut query = Vec::new();
        let expand: Vec<String> = expand.iter().map(|e| e.to_string()).collect();
        push_expand(&mut query, &expand);
        self.get(&["content", id], &query).await
    }

    async fn children_by_type(
        &self,
        id: &str,
        content_type: &str,
        options: &ListOptions,
    ) -> Result<ContentPage> {
        self.get(&["content", id, "child", content_type], &list_query(options))
            .await
    }

    async fn descendants_by_type(
        &self,
        id: &str,
        content_type: &str,
        depth: &str,
        options: &ListOptions,
    ) -> Result<ContentPage> {
        let mut query = list_query(options);
        query.push(("depth", depth.to_string()));
        self.get(&["content", id, "descendant", content_type], &query)
            .await
    }

    async fn create_content(&self, draft: &ContentDraft) -> Result<Content> {
        self.send(Method::POST, &["content"], draft).await
    }

    async fn update_content(&self, id: &str, draft: &ContentDraft) -> Result<Content> {
        self.send(Method::PUT, &["content", id], draft).await
    }

    async fn comments(&self, page_id: &str, query: &CommentQuery) -> Result<ContentPage> {
        let mut params = Vec::new();
        push_expand(&mut params, &query.expand);
        for location in query.location.iter().filter(|l| !l.trim().is_empty()) {
            params.push(("location", location.trim().to_string()));
        }
        params.push(("start", query.start.to_string()));
        params.push(("limit", query.limit.to_string()));
        self.get(&["content", page_id, "child", "comment"], &params)
            .await
    }

    async fn create_comment(&self, page_id: &str, draft: &CommentDraft) -> Result<Content> {
        self.send(
            Method::POST,
            &["content", page_id, "child", "comment"],
            draft,
        )
        .await
    }

    async fn spaces(&self, query: &SpaceQuery) -> Result<SpacePage> {
        let mut params = vec![
            ("start", query.start.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_string()));
        }
        if let Some(space_type) = query.space_type.as_deref().filter(|s| !s.is_empty()) {
            params.push(("type", space_type.to_string()));
        }
        push_expand(&mut params, &query.expand);
        self.get(&["space"], &params).await
    }
}
