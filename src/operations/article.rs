// src/operations/article.rs
//! Article retrieval: resolve the identifier, fetch the page and its blocks,
//! render in the requested format.

use crate::api::ContentSource;
use crate::error::AppError;
use crate::formatting::{render_article, OutputFormat, RenderedOutput};
use crate::types::PageId;

/// A validated article request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    pub page_id: PageId,
    pub format: OutputFormat,
}

impl ArticleRequest {
    /// Validates raw tool arguments.
    ///
    /// An empty id is rejected, then the format is checked, so a bad format
    /// is reported even for an identifier that would not resolve. An identifier that cannot name any
    /// Notion object is reported as not found without contacting Notion.
    pub fn new(article_id: &str, format: Option<&str>) -> Result<Self, AppError> {
        let article_id = article_id.trim();
        if article_id.is_empty() {
            return Err(AppError::InvalidArgument(
                "article_id must not be empty".to_string(),
            ));
        }

        let format = format
            .filter(|f| !f.trim().is_empty())
            .map(str::parse::<OutputFormat>)
            .transpose()?
            .unwrap_or_default();

        let page_id = PageId::parse(article_id).map_err(|e| {
            log::debug!("'{}' is not a Notion identifier: {}", article_id, e);
            AppError::NotFound(format!("no article with id '{}'", article_id))
        })?;

        Ok(Self { page_id, format })
    }
}

/// Fetches the article named by `request` and renders it.
pub async fn retrieve_article(
    source: &dyn ContentSource,
    request: &ArticleRequest,
) -> Result<RenderedOutput, AppError> {
    log::info!(
        "Retrieving article {} as {}",
        request.page_id,
        request.format
    );
    let article = source.retrieve_article(&request.page_id).await?;
    render_article(&article, request.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_request_validation() {
        let request =
            ArticleRequest::new("59833787-2cf9-4fdf-8782-e53db20768a5", Some("text")).unwrap();
        assert_eq!(request.format, OutputFormat::Text);
        assert_eq!(request.page_id.compact(), "598337872cf94fdf8782e53db20768a5");

        let request = ArticleRequest::new("598337872cf94fdf8782e53db20768a5", None).unwrap();
        assert_eq!(request.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_request_errors() {
        assert_eq!(
            ArticleRequest::new("", None).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ArticleRequest::new("missing-id", None).unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ArticleRequest::new("598337872cf94fdf8782e53db20768a5", Some("bogus"))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ArticleRequest::new("missing-id", Some("bogus"))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidArgument
        );
    }
}
