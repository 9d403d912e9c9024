// src/mcp/server.rs
//! MCP server exposing Notion search and article retrieval as tools.

use super::params::{GetArticleParams, SearchParams};
use crate::api::ContentSource;
use crate::error::{AppError, ErrorKind};
use crate::operations::{retrieve_article, search_articles, ArticleRequest, SearchRequest};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;

const SERVER_INSTRUCTIONS: &str = "Search Notion pages with notion_search, then fetch one \
with notion_get_article in json, markdown or text form.";

#[derive(Clone)]
pub struct NotionMcpServer {
    source: Arc<dyn ContentSource>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NotionMcpServer {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            tool_router: Self::tool_router(),
        }
    }

    pub fn get_tool_router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "Search Notion pages. Returns a JSON array of {id, title, tags, created, lastEdited, url}.")]
    async fn notion_search(
        &self,
        Parameters(params): Parameters<SearchParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = until_cancelled(&context, self.search(params)).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Retrieve a Notion page with its full content, rendered as json, markdown (default) or text.")]
    async fn notion_get_article(
        &self,
        Parameters(params): Parameters<GetArticleParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = until_cancelled(&context, self.get_article(params)).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl NotionMcpServer {
    /// Runs a search and serializes the results as a JSON array.
    pub async fn search(&self, params: SearchParams) -> Result<String, McpError> {
        let request = SearchRequest::new(
            &params.query,
            params.limit,
            params.sort_by.as_deref(),
            params.sort_order.as_deref(),
        )
        .map_err(to_mcp_error)?;

        let results = search_articles(self.source.as_ref(), &request)
            .await
            .map_err(to_mcp_error)?;

        serde_json::to_string_pretty(&results).map_err(|e| to_mcp_error(e.into()))
    }

    /// Retrieves and renders one article.
    pub async fn get_article(&self, params: GetArticleParams) -> Result<String, McpError> {
        let request =
            ArticleRequest::new(&params.article_id, params.format.as_deref()).map_err(to_mcp_error)?;

        retrieve_article(self.source.as_ref(), &request)
            .await
            .and_then(|rendered| rendered.into_string())
            .map_err(to_mcp_error)
    }
}

/// Drops `work` as soon as the client cancels the request; nothing partial is returned.
async fn until_cancelled<T>(
    context: &RequestContext<RoleServer>,
    work: impl Future<Output = Result<T, McpError>>,
) -> Result<T, McpError> {
    tokio::select! {
        result = work => result,
        _ = context.ct.cancelled() => {
            log::info!("Request {:?} cancelled by client", context.id);
            Err(McpError::internal_error(
                "request cancelled",
                Some(json!({ "kind": ErrorKind::Internal.as_str() })),
            ))
        }
    }
}

/// Maps an operation failure to a protocol error carrying its kind.
pub fn to_mcp_error(err: AppError) -> McpError {
    let kind = err.kind();
    let data = Some(json!({ "kind": kind.as_str() }));
    let message = err.to_string();

    match kind {
        ErrorKind::Internal | ErrorKind::Upstream => log::error!("{}: {}", kind, message),
        _ => log::warn!("{}: {}", kind, message),
    }

    match kind {
        ErrorKind::InvalidArgument => McpError::invalid_params(message, data),
        ErrorKind::NotFound => McpError::resource_not_found(message, data),
        _ => McpError::internal_error(message, data),
    }
}

#[tool_handler]
impl ServerHandler for NotionMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, SearchResult};
    use crate::types::PageId;
    use rmcp::model::ErrorCode;

    struct Unreachable;

    #[async_trait::async_trait]
    impl ContentSource for Unreachable {
        async fn search_pages(
            &self,
            _query: &crate::api::SearchQuery,
        ) -> Result<Vec<SearchResult>, AppError> {
            panic!("validation should fail before searching")
        }

        async fn retrieve_article(&self, _id: &PageId) -> Result<Article, AppError> {
            panic!("validation should fail before fetching")
        }
    }

    fn server() -> NotionMcpServer {
        NotionMcpServer::new(Arc::new(Unreachable))
    }

    #[test]
    fn test_tools_are_registered() {
        let mut names: Vec<String> = server()
            .get_tool_router()
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["notion_get_article", "notion_search"]);
    }

    #[test]
    fn test_error_mapping() {
        let err = to_mcp_error(AppError::InvalidArgument("bad".into()));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data, Some(json!({ "kind": "InvalidArgumentError" })));

        let err = to_mcp_error(AppError::NotFound("gone".into()));
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);

        let err = to_mcp_error(AppError::internal("oops"));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.data, Some(json!({ "kind": "InternalError" })));
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_before_searching() {
        let err = server()
            .search(SearchParams {
                query: String::new(),
                limit: Some(10),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.data, Some(json!({ "kind": "InvalidArgumentError" })));
    }

    #[tokio::test]
    async fn test_unparseable_id_is_not_found() {
        let err = server()
            .get_article(GetArticleParams {
                article_id: "missing-id".to_string(),
                format: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.data, Some(json!({ "kind": "NotFoundError" })));
    }
}
