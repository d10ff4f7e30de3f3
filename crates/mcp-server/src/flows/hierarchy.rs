//! Page retrieval with its child hierarchy.

use std::collections::HashSet;

use confluence_client::models::{Content, ListOptions};
use confluence_client::ConfluenceApi;
use confluence_protocol::{PageDetail, PageSummary};

use crate::error::FetchError;

pub const NO_CONTENT_PLACEHOLDER: &str = "No content available in either storage or view format";

const PAGE_EXPAND: [&str; 3] = ["body.storage", "body.view", "version"];
const HIERARCHY_LIMIT: i64 = 100;

/// Storage first, then view, then [`NO_CONTENT_PLACEHOLDER`].
pub fn resolve_body(content: &Content) -> String {
    let body = content.body.as_ref();
    let storage = body
        .and_then(|b| b.storage.as_ref())
        .map(|node| node.value.as_str())
        .filter(|value| !value.is_empty());
    let view = body
        .and_then(|b| b.view.as_ref())
        .map(|node| node.value.as_str())
        .filter(|value| !value.is_empty());
    storage
        .or(view)
        .unwrap_or(NO_CONTENT_PLACEHOLDER)
        .to_string()
}

fn summarize(content: &Content) -> PageSummary {
    PageSummary {
        title: content.title.clone(),
        id: content.id.clone(),
        version: content.version_number().unwrap_or(0),
    }
}

fn hierarchy_options() -> ListOptions {
    ListOptions {
        expand: vec!["version".to_string()],
        start: 0,
        limit: HIERARCHY_LIMIT,
    }
}

/// Fetches a page, its direct children and the rest of its descendants.
///
/// Only the page itself is required. The two hierarchy listings are best-effort: a failure
/// leaves that section empty and adds an entry to [`PageDetail::warnings`].
pub async fn list_page_with_descendants(
    api: &dyn ConfluenceApi,
    page_id: &str,
) -> Result<PageDetail, FetchError> {
    let content = api
        .get_content(page_id, &PAGE_EXPAND)
        .await
        .map_err(|err| FetchError::new("get page", err))?;

    let mut warnings = Vec::new();
    let options = hierarchy_options();

    let direct: Vec<Content> = match api.children_by_type(page_id, "page", &options).await {
        Ok(page) => page.results,
        Err(err) => {
            log::warn!("child pages of {page_id} unavailable: {err}");
            warnings.push(format!("direct children unavailable: {err}"));
            Vec::new()
        }
    };

    let descendants: Vec<Content> = match api
        .descendants_by_type(page_id, "page", "all", &options)
        .await
    {
        Ok(page) => page.results,
        Err(err) => {
            log::warn!("descendants of {page_id} unavailable: {err}");
            warnings.push(format!("descendants unavailable: {err}"));
            Vec::new()
        }
    };

    let direct_ids: HashSet<&str> = direct.iter().map(|c| c.id.as_str()).collect();
    let direct_children: Vec<PageSummary> = direct.iter().map(summarize).collect();
    let all_descendants: Vec<PageSummary> = descendants
        .iter()
        .filter(|c| !direct_ids.contains(c.id.as_str()))
        .map(summarize)
        .collect();

    let message = format!(
        "Page retrieved successfully with {} direct children and {} other descendants",
        direct_children.len(),
        all_descendants.len()
    );

    Ok(PageDetail {
        title: content.title.clone(),
        id: content.id.clone(),
        version: content.version_number().unwrap_or(0),
        kind: content.kind.clone(),
        content: resolve_body(&content),
        direct_children,
        all_descendants,
        message,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{page, with_body, Call, FakeConfluence};
    use pretty_assertions::assert_eq;

    fn ids(pages: &[PageSummary]) -> Vec<&str> {
        pages.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn descendants_exclude_direct_children() {
        let fake = FakeConfluence::new()
            .with_page(with_body(page("root", "Root", 5), "<p>root</p>", ""))
            .with_children("root", vec![page("A", "A", 1), page("B", "B", 2)])
            .with_descendants(
                "root",
                vec![
                    page("A", "A", 1),
                    page("C", "C", 3),
                    page("B", "B", 2),
                    page("D", "D", 4),
                ],
            );

        let detail = list_page_with_descendants(&fake, "root").await.unwrap();

        assert_eq!(ids(&detail.direct_children), vec!["A", "B"]);
        assert_eq!(ids(&detail.all_descendants), vec!["C", "D"]);
        assert_eq!(detail.all_descendants[0].version, 3);
        assert!(detail.warnings.is_empty());
        assert_eq!(
            detail.message,
            "Page retrieved successfully with 2 direct children and 2 other descendants"
        );
    }

    #[tokio::test]
    async fn children_failure_keeps_the_page() {
        let fake = FakeConfluence::new()
            .with_page(with_body(page("root", "Root", 5), "<p>root</p>", ""))
            .with_descendants("root", vec![page("A", "A", 1), page("C", "C", 1)])
            .failing("children");

        let detail = list_page_with_descendants(&fake, "root").await.unwrap();

        assert_eq!(detail.title, "Root");
        assert_eq!(detail.content, "<p>root</p>");
        assert!(detail.direct_children.is_empty());
        assert_eq!(ids(&detail.all_descendants), vec!["A", "C"]);
        assert_eq!(detail.warnings.len(), 1);
        assert!(detail.warnings[0].starts_with("direct children unavailable"));
    }

    #[tokio::test]
    async fn descendants_failure_is_a_warning() {
        let fake = FakeConfluence::new()
            .with_page(page("root", "Root", 1))
            .with_children("root", vec![page("A", "A", 1)])
            .failing("descendants");

        let detail = list_page_with_descendants(&fake, "root").await.unwrap();

        assert_eq!(ids(&detail.direct_children), vec!["A"]);
        assert!(detail.all_descendants.is_empty());
        assert!(detail.warnings[0].starts_with("descendants unavailable"));
    }

    #[tokio::test]
    async fn missing_page_is_fatal() {
        let fake = FakeConfluence::new();

        let err = list_page_with_descendants(&fake, "nope").await.unwrap_err();

        assert_eq!(err.source.status(), Some(404));
        assert_eq!(fake.calls().len(), 1);
    }

    #[tokio::test]
    async fn requests_pages_with_versions() {
        let fake = FakeConfluence::new().with_page(page("root", "Root", 1));

        list_page_with_descendants(&fake, "root").await.unwrap();

        let calls = fake.calls();
        assert_eq!(
            calls[0],
            Call::GetContent {
                id: "root".into(),
                expand: vec!["body.storage".into(), "body.view".into(), "version".into()]
            }
        );
        assert_eq!(
            calls[2],
            Call::Descendants {
                id: "root".into(),
                depth: "all".into(),
                options: hierarchy_options()
            }
        );
    }

    #[test]
    fn storage_wins_over_view() {
        let content = with_body(page("1", "P", 1), "S", "V");
        assert_eq!(resolve_body(&content), "S");
    }

    #[test]
    fn view_is_the_fallback() {
        let content = with_body(page("1", "P", 1), "", "V");
        assert_eq!(resolve_body(&content), "V");
    }

    #[test]
    fn placeholder_when_nothing_is_populated() {
        assert_eq!(resolve_body(&page("1", "P", 1)), NO_CONTENT_PLACEHOLDER);
        let empty = with_body(page("1", "P", 1), "", "");
        assert_eq!(resolve_body(&empty), NO_CONTENT_PLACEHOLDER);
    }
}
