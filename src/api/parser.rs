// src/api/parser.rs
//! Parsing of raw Notion responses into domain types.
//!
//! Success bodies are decoded with notion-client's serde types; error
//! bodies become `AppError::NotionService` with the typed error code.

use super::client::ApiResponse;
use super::responses::{
    NotionError, NotionPage, PaginatedResponse, RetrieveBlockChildrenResponse, SearchResponse,
    ToDomain,
};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{ArticleMetadata, Block, SearchResult};
use reqwest::StatusCode;

/// Parse any Notion API response using notion-client types
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

/// Turn a non-2xx response into an error, preferring Notion's own error object.
fn parse_error_body(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        log::warn!(
            "Notion API error from {}: {} {} ({})",
            url,
            status,
            notion_error.code,
            notion_error.message
        );
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
            request_id: notion_error.request_id,
        };
    }

    log::warn!("Unparseable error body from {}: {} {}", url, status, preview(body));
    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
        request_id: None,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

/// Parse a `GET /pages/{id}` response into article metadata
pub fn parse_page_response(result: ApiResponse<String>) -> Result<ArticleMetadata, AppError> {
    let notion_page: NotionPage = parse_api_response(result)?;
    ToDomain::to_domain(notion_page)
}

/// Parse one page of search or database-query results.
///
/// Objects other than pages are skipped.
pub fn parse_search_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<SearchResult>, AppError> {
    let response: SearchResponse = parse_api_response(result)?;
    response.try_map(|value| {
        if value.get("object").and_then(|o| o.as_str()) != Some("page") {
            return Ok(None);
        }
        let page: NotionPage = serde_json::from_value(value)?;
        let metadata: ArticleMetadata = page.to_domain()?;
        Ok(Some(SearchResult::from(&metadata)))
    })
}

/// Parse one page of `GET /blocks/{id}/children`
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let response: RetrieveBlockChildrenResponse = parse_api_response(result)?;
    response.try_map(|block| block.to_domain().map(Some))
}
