// src/api/client.rs
//! HTTP client for the Notion API.
//!
//! Handles authentication headers, timeouts and endpoint routing. Parsing
//! lives in `parser`; this module only moves bytes and walks pagination.

use super::pagination::fetch_all_pages;
use super::types::{DatabaseQueryPayload, SearchPayload, SearchQuery};
use super::ContentSource;
use crate::config::ServerConfig;
use crate::constants::{ARTICLE_MAX_NESTING_DEPTH, NOTION_API_PAGE_SIZE, NOTION_API_VERSION};
use crate::error::AppError;
use crate::model::{Article, Block, SearchResult};
use crate::types::{ApiKey, DatabaseId, PageId};
use futures::future::{try_join_all, BoxFuture, FutureExt};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// Notion REST client: one connection pool, one token, optional database scope.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
    database_id: Option<DatabaseId>,
}

impl NotionHttpClient {
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(&config.api_key)?)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.as_str().trim_end_matches('/').to_string(),
            database_id: config.database_id,
        })
    }

    /// Headers sent with every request. The bearer value is marked sensitive.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut bearer = header::HeaderValue::try_from(format!("Bearer {}", api_key.as_str()))
            .map_err(|e| {
                AppError::MissingConfiguration(format!("API token is not a valid header value: {}", e))
            })?;
        bearer.set_sensitive(true);

        Ok(header::HeaderMap::from_iter([
            (header::AUTHORIZATION, bearer),
            (
                header::HeaderName::from_static("notion-version"),
                header::HeaderValue::from_static(NOTION_API_VERSION),
            ),
            (
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            ),
        ]))
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// `GET {base}/{endpoint}`; any status comes back as a response.
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse<String>, AppError> {
        let url = self.url_for(endpoint);
        log::debug!("GET {}", url);
        read_body(self.client.get(url).send().await?).await
    }

    /// `POST {base}/{endpoint}` with a JSON body.
    pub async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<ApiResponse<String>, AppError> {
        let url = self.url_for(endpoint);
        log::debug!("POST {}", url);
        read_body(self.client.post(url).json(body).send().await?).await
    }

    /// Workspace-wide search through `POST /search`.
    async fn search_workspace(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError> {
        let result = fetch_all_pages(
            |cursor| async move {
                let payload = SearchPayload::pages_matching(query, cursor);
                super::parser::parse_search_pagination(self.post("search", &payload).await?)
            },
            Some(query.limit),
        )
        .await?;
        Ok(result.items)
    }

    /// Title search restricted to one database.
    async fn search_database(
        &self,
        database: &DatabaseId,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResult>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_dashed());
        let endpoint = endpoint.as_str();
        let result = fetch_all_pages(
            |cursor| async move {
                let payload = DatabaseQueryPayload::titles_containing(query, cursor);
                super::parser::parse_search_pagination(self.post(endpoint, &payload).await?)
            },
            Some(query.limit),
        )
        .await?;
        Ok(result.items)
    }

    /// All direct children of a block or page, across every result page.
    pub async fn retrieve_children(&self, parent: &str) -> Result<Vec<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent);
        let endpoint = endpoint.as_str();
        let result = fetch_all_pages(
            |cursor| async move {
                let mut path = format!("{}?page_size={}", endpoint, NOTION_API_PAGE_SIZE);
                if let Some(cursor) = cursor {
                    path.push_str("&start_cursor=");
                    path.push_str(&cursor);
                }
                super::parser::parse_blocks_pagination(self.get(&path).await?)
            },
            None,
        )
        .await?;
        Ok(result.items)
    }

    /// Children of `parent` with their own children filled in, down to the nesting limit.
    ///
    /// Sibling subtrees are fetched concurrently; the first failure aborts the walk.
    fn retrieve_block_tree(&self, parent: String, depth: u8) -> BoxFuture<'_, Result<Vec<Block>, AppError>> {
        async move {
            let mut blocks = self.retrieve_children(&parent).await?;
            if depth >= ARTICLE_MAX_NESTING_DEPTH {
                if blocks.iter().any(|block| !block.common().is_expanded()) {
                    log::warn!(
                        "Nesting limit {} reached under {}; deeper blocks are omitted",
                        ARTICLE_MAX_NESTING_DEPTH,
                        parent
                    );
                }
                return Ok(blocks);
            }

            let expandable: Vec<usize> = blocks
                .iter()
                .enumerate()
                .filter(|(_, block)| should_descend(block))
                .map(|(index, _)| index)
                .collect();

            let subtrees = try_join_all(
                expandable
                    .iter()
                    .map(|&index| self.retrieve_block_tree(blocks[index].id().to_dashed(), depth + 1)),
            )
            .await?;

            for (index, children) in expandable.into_iter().zip(subtrees) {
                blocks[index].set_children(children);
            }

            Ok(blocks)
        }
        .boxed()
    }
}

/// Child pages are articles of their own; their bodies are not inlined.
fn should_descend(block: &Block) -> bool {
    block.has_children() && !matches!(block, Block::ChildPage(_))
}

#[async_trait::async_trait]
impl ContentSource for NotionHttpClient {
    async fn search_pages(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError> {
        match &self.database_id {
            Some(database) => {
                log::debug!("Searching database {} for '{}'", database, query.query);
                self.search_database(database, query).await
            }
            None => {
                log::debug!("Searching workspace for '{}'", query.query);
                self.search_workspace(query).await
            }
        }
    }

    async fn retrieve_article(&self, id: &PageId) -> Result<Article, AppError> {
        let endpoint = format!("pages/{}", id.to_dashed());
        let metadata = super::parser::parse_page_response(self.get(&endpoint).await?)?;

        let content = self.retrieve_block_tree(id.to_dashed(), 1).await?;

        let article = Article { metadata, content };
        log::info!(
            "Retrieved article '{}' ({} blocks)",
            article.title(),
            article.block_count()
        );
        Ok(article)
    }
}

/// A response body with the status and final URL it came with.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Reads the whole body; status handling is left to the parser.
async fn read_body(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let data = response.text().await?;
    log::trace!("{} {} ({} bytes)", status, url, data.len());

    Ok(ApiResponse { data, status, url })
}
