// src/mcp/mod.rs
//! Model Context Protocol front-end.

pub mod params;
pub mod server;

pub use params::{GetArticleParams, SearchParams};
pub use server::{to_mcp_error, NotionMcpServer};
