// src/api/types.rs
//! Request shapes sent to the Notion API.

use crate::constants::NOTION_API_PAGE_SIZE;
use crate::types::SortOrder;
use serde::Serialize;

/// What a search asks of the content source, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    /// Number of results wanted; the source never returns more.
    pub limit: usize,
    pub sort_order: SortOrder,
}

impl SearchQuery {
    /// Page size requested from Notion for this query.
    pub fn page_size(&self) -> usize {
        self.limit.min(NOTION_API_PAGE_SIZE)
    }
}

/// `sort` object shared by `/search` and database queries.
#[derive(Debug, Clone, Serialize)]
pub struct TimestampSort {
    pub timestamp: &'static str,
    pub direction: &'static str,
}

impl TimestampSort {
    pub fn last_edited(order: SortOrder) -> Self {
        Self {
            timestamp: "last_edited_time",
            direction: order.api_direction(),
        }
    }
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPayload {
    pub query: String,
    pub page_size: usize,
    pub sort: TimestampSort,
    pub filter: ObjectFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectFilter {
    pub property: &'static str,
    pub value: &'static str,
}

impl SearchPayload {
    pub fn pages_matching(query: &SearchQuery, start_cursor: Option<String>) -> Self {
        Self {
            query: query.query.clone(),
            page_size: query.page_size(),
            sort: TimestampSort::last_edited(query.sort_order),
            filter: ObjectFilter {
                property: "object",
                value: "page",
            },
            start_cursor,
        }
    }
}

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseQueryPayload {
    pub filter: serde_json::Value,
    pub sorts: Vec<TimestampSort>,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl DatabaseQueryPayload {
    /// Pages whose title contains the query text.
    pub fn titles_containing(query: &SearchQuery, start_cursor: Option<String>) -> Self {
        Self {
            filter: serde_json::json!({
                "property": "title",
                "title": { "contains": query.query },
            }),
            sorts: vec![TimestampSort::last_edited(query.sort_order)],
            page_size: query.page_size(),
            start_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(limit: usize) -> SearchQuery {
        SearchQuery {
            query: "roadmap".to_string(),
            limit,
            sort_order: SortOrder::Asc,
        }
    }

    #[test]
    fn test_search_payload_shape() {
        let payload = serde_json::to_value(SearchPayload::pages_matching(&query(5), None)).unwrap();
        assert_eq!(
            payload,
            json!({
                "query": "roadmap",
                "page_size": 5,
                "sort": { "timestamp": "last_edited_time", "direction": "ascending" },
                "filter": { "property": "object", "value": "page" }
            })
        );
    }

    #[test]
    fn test_database_payload_shape() {
        let payload = serde_json::to_value(DatabaseQueryPayload::titles_containing(
            &query(500),
            Some("cursor-1".to_string()),
        ))
        .unwrap();
        assert_eq!(payload["filter"]["title"]["contains"], "roadmap");
        assert_eq!(payload["sorts"][0]["direction"], "ascending");
        assert_eq!(payload["page_size"], 100);
        assert_eq!(payload["start_cursor"], "cursor-1");
    }
}
