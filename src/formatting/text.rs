// src/formatting/text.rs
//! Plain-text rendering of articles: the words without any markup.

use super::block_renderer::{
    finish_document, render_blocks, write_prefixed_lines, BlockPosition, BlockRenderer,
};
use super::rich_text::rich_text_to_plain;
use crate::error::AppError;
use crate::model::{Article, Block};
use std::fmt::Write;

pub struct PlainTextRenderer;

impl BlockRenderer for PlainTextRenderer {
    fn render_block(
        &self,
        block: &Block,
        position: BlockPosition,
        out: &mut String,
    ) -> Result<bool, AppError> {
        let indent = position.indent();

        let line = match block {
            Block::BulletedListItem(item) => {
                format!("• {}", rich_text_to_plain(&item.content.rich_text))
            }
            Block::NumberedListItem(item) => format!(
                "{}) {}",
                position.list_number.unwrap_or(1),
                rich_text_to_plain(&item.content.rich_text)
            ),
            Block::ToDo(todo) => format!(
                "{} {}",
                if todo.checked { '☑' } else { '☐' },
                rich_text_to_plain(&todo.content.rich_text)
            ),
            Block::Callout(callout) => {
                let text = rich_text_to_plain(&callout.content.rich_text);
                match &callout.icon {
                    Some(icon) => format!("{} {}", icon, text),
                    None => text,
                }
            }
            Block::Bookmark(bookmark) => {
                let caption = rich_text_to_plain(&bookmark.caption);
                if caption.trim().is_empty() {
                    bookmark.url.clone()
                } else {
                    format!("{} ({})", caption, bookmark.url)
                }
            }
            Block::Code(code) => {
                let source = code.content.plain_text();
                let caption = rich_text_to_plain(&code.caption);
                match (source.trim().is_empty(), caption.trim().is_empty()) {
                    (_, true) => source,
                    (true, false) => caption,
                    (false, false) => format!("{}\n{}", source, caption),
                }
            }
            Block::Divider(_) => return Ok(false),
            Block::Unsupported(unsupported) => {
                log::debug!(
                    "Skipping unsupported block type '{}' in text",
                    unsupported.block_type
                );
                return Ok(false);
            }
            other => other.plain_text(),
        };

        if line.trim().is_empty() {
            return Ok(false);
        }
        write_prefixed_lines(out, &indent, &line);
        Ok(true)
    }
}

/// Renders a whole article: title, tags line, then the body.
pub fn render_text(article: &Article) -> Result<String, AppError> {
    let mut output = String::new();
    writeln!(output, "{}", article.title())?;
    writeln!(output)?;

    if !article.tags().is_empty() {
        writeln!(output, "Tags: {}", article.tags().join(", "))?;
        writeln!(output)?;
    }

    output.push_str(&render_blocks(&PlainTextRenderer, &article.content)?);
    Ok(finish_document(output))
}
