// src/api/mod.rs
//! Notion API interaction: the ability to search a workspace and read pages.
//!
//! I/O (`client`), parsing (`parser`, `responses`) and conversion into the
//! domain model (`notion_client_adapter`) are kept apart.

pub mod client;
pub mod notion_client_adapter;
mod pagination;
pub mod parser;
pub mod responses;
mod types;

use crate::error::AppError;
use crate::model::{Article, SearchResult};
use crate::types::PageId;

/// The ability to retrieve content from a Notion workspace.
///
/// Operations depend on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Pages matching `query`, at most `query.limit` of them, in the requested order.
    async fn search_pages(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError>;

    /// A page's metadata together with its full block tree.
    async fn retrieve_article(&self, id: &PageId) -> Result<Article, AppError>;
}

pub use client::NotionHttpClient;
pub use pagination::{fetch_all_pages, PaginationResult};
pub use types::SearchQuery;
