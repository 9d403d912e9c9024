// src/mcp/params.rs
//! Tool argument payloads as they arrive over MCP.
//!
//! Fields stay loosely typed here so that bad values reach the operation
//! layer and come back as `InvalidArgumentError` with a readable message.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Text to look for in Notion pages
    pub query: String,

    /// Maximum number of results (default 10, at most 100)
    #[serde(default)]
    pub limit: Option<i64>,

    /// Local re-ordering criterion; only "last_edited" is supported
    #[serde(default)]
    pub sort_by: Option<String>,

    /// "asc" or "desc" (default "desc")
    #[serde(default)]
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetArticleParams {
    /// Notion page ID (with or without dashes) or page URL
    pub article_id: String,

    /// "json", "markdown" or "text" (default "markdown")
    #[serde(default)]
    pub format: Option<String>,
}
