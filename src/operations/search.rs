// src/operations/search.rs
//! Page search: validate the caller's parameters, ask the content source,
//! then apply local ordering and the result limit.

use crate::api::{ContentSource, SearchQuery};
use crate::constants::{DEFAULT_SEARCH_LIMIT, SEARCH_MAX_RESULTS};
use crate::error::AppError;
use crate::model::SearchResult;
use crate::types::{SortBy, SortOrder};

/// A validated search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: usize,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
}

impl SearchRequest {
    /// Validates raw tool arguments.
    ///
    /// The query must contain non-whitespace text and the limit, when
    /// given, must be positive. Limits above `SEARCH_MAX_RESULTS` are clamped.
    pub fn new(
        query: &str,
        limit: Option<i64>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Self, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::InvalidArgument(
                "query must not be empty".to_string(),
            ));
        }

        let limit = match limit {
            None => DEFAULT_SEARCH_LIMIT,
            Some(n) if n <= 0 => {
                return Err(AppError::InvalidArgument(format!(
                    "limit must be a positive integer, got {}",
                    n
                )))
            }
            Some(n) => {
                let requested = usize::try_from(n).unwrap_or(usize::MAX);
                if requested > SEARCH_MAX_RESULTS {
                    log::debug!(
                        "Clamping search limit {} to {}",
                        requested,
                        SEARCH_MAX_RESULTS
                    );
                }
                requested.min(SEARCH_MAX_RESULTS)
            }
        };

        let sort_by = sort_by
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<SortBy>)
            .transpose()?;
        let sort_order = sort_order
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            query: query.to_string(),
            limit,
            sort_by,
            sort_order,
        })
    }

    fn to_query(&self) -> SearchQuery {
        SearchQuery {
            query: self.query.clone(),
            limit: self.limit,
            sort_order: self.sort_order,
        }
    }
}

/// Runs a search against `source`.
///
/// Results are at most `request.limit` long. With `sort_by` set they are
/// re-ordered locally; the sort is stable, so ties keep Notion's order.
pub async fn search_articles(
    source: &dyn ContentSource,
    request: &SearchRequest,
) -> Result<Vec<SearchResult>, AppError> {
    log::info!(
        "Searching for '{}' (limit {}, order {})",
        request.query,
        request.limit,
        request.sort_order
    );

    let mut results = source.search_pages(&request.to_query()).await?;

    if let Some(sort_by) = request.sort_by {
        sort_results(&mut results, sort_by, request.sort_order);
    }
    results.truncate(request.limit);

    log::info!("Search for '{}' returned {} result(s)", request.query, results.len());
    Ok(results)
}

fn sort_results(results: &mut [SearchResult], sort_by: SortBy, order: SortOrder) {
    match sort_by {
        SortBy::LastEdited => results.sort_by(|a, b| match order {
            SortOrder::Asc => a.last_edited.cmp(&b.last_edited),
            SortOrder::Desc => b.last_edited.cmp(&a.last_edited),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let request = SearchRequest::new("  roadmap ", None, None, None).unwrap();
        assert_eq!(request.query, "roadmap");
        assert_eq!(request.limit, 10);
        assert_eq!(request.sort_by, None);
        assert_eq!(request.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_invalid_arguments() {
        for request in [
            SearchRequest::new("", Some(10), None, None),
            SearchRequest::new("   ", None, None, None),
            SearchRequest::new("roadmap", Some(0), None, None),
            SearchRequest::new("roadmap", Some(-3), None, None),
            SearchRequest::new("roadmap", None, Some("title"), None),
            SearchRequest::new("roadmap", None, None, Some("up")),
        ] {
            assert_eq!(request.unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_limit_is_clamped() {
        let request = SearchRequest::new("roadmap", Some(5_000), None, None).unwrap();
        assert_eq!(request.limit, 100);
    }

    #[test]
    fn test_sort_values() {
        let request =
            SearchRequest::new("roadmap", Some(5), Some("last_edited_time"), Some("ASC")).unwrap();
        assert_eq!(request.sort_by, Some(SortBy::LastEdited));
        assert_eq!(request.sort_order, SortOrder::Asc);
    }
}
