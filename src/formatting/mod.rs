// src/formatting/mod.rs
//! Renders articles into the formats offered to tool callers.
//!
//! Every format carries the same content (title, tags, block text in
//! document order); only structure and markup differ. Rendering is a pure
//! function of the article and the format.

pub mod block_renderer;
mod json;
mod markdown;
pub mod rich_text;
mod text;

pub use json::render_json;
pub use markdown::render_markdown;
pub use text::render_text;

use crate::error::AppError;
use crate::model::Article;
use crate::types::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output formats for a retrieved article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
    Text,
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(ValidationError::UnsupportedValue {
                field: "format",
                value: other.to_string(),
                expected: "json, markdown, text",
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// An article rendered in one format.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedOutput {
    Json(serde_json::Value),
    Markdown(String),
    Text(String),
}

impl RenderedOutput {
    pub fn format(&self) -> OutputFormat {
        match self {
            RenderedOutput::Json(_) => OutputFormat::Json,
            RenderedOutput::Markdown(_) => OutputFormat::Markdown,
            RenderedOutput::Text(_) => OutputFormat::Text,
        }
    }

    /// The rendering as a string; JSON is pretty-printed.
    pub fn into_string(self) -> Result<String, AppError> {
        match self {
            RenderedOutput::Json(value) => Ok(serde_json::to_string_pretty(&value)?),
            RenderedOutput::Markdown(s) | RenderedOutput::Text(s) => Ok(s),
        }
    }
}

/// Renders `article` in `format`.
pub fn render_article(article: &Article, format: OutputFormat) -> Result<RenderedOutput, AppError> {
    Ok(match format {
        OutputFormat::Json => RenderedOutput::Json(render_json(article)),
        OutputFormat::Markdown => RenderedOutput::Markdown(render_markdown(article)?),
        OutputFormat::Text => RenderedOutput::Text(render_text(article)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::default(), OutputFormat::Markdown);

        let err: AppError = "bogus".parse::<OutputFormat>().unwrap_err().into();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, OutputFormat::Text);
        assert!(serde_json::from_str::<OutputFormat>("\"bogus\"").is_err());
    }
}
