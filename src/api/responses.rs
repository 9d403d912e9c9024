// src/api/responses.rs
//! API response types, parsed with notion-client's serde implementations.

use serde::{Deserialize, Serialize};

pub use notion_client::objects::{
    block::Block as NotionBlock, error::Error as NotionError, page::Page as NotionPage,
};

/// Generic paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Converts every result, keeping the pagination envelope.
    pub fn try_map<U, F>(self, f: F) -> Result<PaginatedResponse<U>, crate::error::AppError>
    where
        F: FnMut(T) -> Result<Option<U>, crate::error::AppError>,
    {
        let results = self
            .results
            .into_iter()
            .map(f)
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedResponse {
            object: self.object,
            results,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        })
    }
}

/// `POST /search` and database query results; search can mix pages and databases.
pub type SearchResponse = PaginatedResponse<serde_json::Value>;

/// Block children response using notion-client types
pub type RetrieveBlockChildrenResponse = PaginatedResponse<NotionBlock>;

/// Trait for converting notion-client types to domain types
pub trait ToDomain<T> {
    fn to_domain(self) -> Result<T, crate::error::AppError>;
}

impl ToDomain<crate::model::ArticleMetadata> for NotionPage {
    fn to_domain(self) -> Result<crate::model::ArticleMetadata, crate::error::AppError> {
        crate::api::notion_client_adapter::convert_page_metadata(self)
    }
}

impl ToDomain<crate::model::Block> for NotionBlock {
    fn to_domain(self) -> Result<crate::model::Block, crate::error::AppError> {
        crate::api::notion_client_adapter::convert_block(self)
    }
}
