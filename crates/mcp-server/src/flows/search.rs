//! CQL search over pages and spaces.

use confluence_client::models::SearchResult;
use confluence_client::ConfluenceApi;
use confluence_protocol::{SearchHit, SearchPageOutput, SearchSpaceOutput, SpaceHit};

use crate::error::FetchError;

pub const SEARCH_LIMIT: i64 = 5;

fn non_blank(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

fn hit(result: &SearchResult) -> SearchHit {
    let content = result.content.as_ref();
    SearchHit {
        title: content
            .and_then(|c| non_blank(&c.title))
            .unwrap_or(&result.title)
            .to_string(),
        id: content.map(|c| c.id.clone()).unwrap_or_default(),
        kind: content
            .and_then(|c| non_blank(&c.kind))
            .unwrap_or(&result.entity_type)
            .to_string(),
        link: content
            .and_then(|c| c.self_link())
            .unwrap_or(&result.url)
            .to_string(),
        last_modified: result.last_modified.clone(),
        excerpt: result.excerpt.clone(),
    }
}

pub async fn search_pages(
    api: &dyn ConfluenceApi,
    cql: &str,
) -> Result<SearchPageOutput, FetchError> {
    let page = api
        .search(cql, SEARCH_LIMIT)
        .await
        .map_err(|err| FetchError::new("search", err))?;

    let results: Vec<SearchHit> = page.results.iter().map(hit).collect();
    let message = if results.is_empty() {
        "No results found for the search query".to_string()
    } else {
        format!("Found {} results for query: {cql}", results.len())
    };
    Ok(SearchPageOutput {
        query: cql.to_string(),
        result_count: results.len(),
        results,
        message,
    })
}

/// CQL matching spaces whose text contains `query`.
pub fn space_cql(query: &str) -> String {
    let escaped = query.trim().replace('\\', "\\\\").replace('"', "\\\"");
    format!("type=space AND text~\"{escaped}\"")
}

pub async fn search_spaces(
    api: &dyn ConfluenceApi,
    query: &str,
) -> Result<SearchSpaceOutput, FetchError> {
    let page = api
        .search(&space_cql(query), SEARCH_LIMIT)
        .await
        .map_err(|err| FetchError::new("search spaces", err))?;

    let spaces: Vec<SpaceHit> = page
        .results
        .iter()
        .filter_map(|result| {
            let space = result.space.as_ref()?;
            let link = non_blank(&result.url)
                .or_else(|| space.self_link())
                .unwrap_or_default();
            Some(SpaceHit {
                name: space.name.clone(),
                key: space.key.clone(),
                link: link.to_string(),
            })
        })
        .collect();

    let message = if spaces.is_empty() {
        "No spaces found for the search query".to_string()
    } else {
        format!("Found {} spaces matching: {}", spaces.len(), query.trim())
    };
    Ok(SearchSpaceOutput {
        query: query.trim().to_string(),
        result_count: spaces.len(),
        spaces,
        message,
    })
}
