// src/lib.rs
//! notion-mcp library: Notion search and article rendering behind an MCP server.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ErrorKind`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ServerConfig`
//! - **Domain model**: `Article`, `ArticleMetadata`, `SearchResult`, `Block`
//! - **Domain types**: `ApiKey`, `PageId`, `BlockId`, `SortOrder`, etc.
//! - **API client**: `ContentSource`, `NotionHttpClient`
//! - **Operations**: `search_articles`, `retrieve_article`
//! - **Formatting**: `OutputFormat`, `RenderedOutput`, `render_article`
//! - **MCP**: `NotionMcpServer`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod mcp;
pub mod model;
pub mod operations;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, ErrorKind, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ServerConfig};

// --- Domain Model ---
pub use crate::model::{Article, ArticleMetadata, Block, BlockCommon, SearchResult};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, DatabaseId, Link, PageId, RichTextItem, RichTextType, SortBy,
    SortOrder,
};

// --- API Client ---
pub use crate::api::{ContentSource, NotionHttpClient, SearchQuery};

// --- Operations ---
pub use crate::operations::{retrieve_article, search_articles, ArticleRequest, SearchRequest};

// --- Formatting ---
pub use crate::formatting::{render_article, OutputFormat, RenderedOutput};

// --- MCP ---
pub use crate::mcp::NotionMcpServer;
