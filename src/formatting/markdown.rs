// src/formatting/markdown.rs
//! Markdown rendering of articles.

use super::block_renderer::{
    finish_document, render_blocks, write_prefixed_lines, BlockPosition, BlockRenderer,
};
use super::rich_text::{code_span, rich_text_to_markdown};
use crate::error::AppError;
use crate::model::{Article, Block, TextBlockContent, ToDoBlock};
use std::fmt::Write;

/// Renders blocks as GitHub-flavoured markdown.
pub struct MarkdownRenderer;

impl BlockRenderer for MarkdownRenderer {
    fn render_block(
        &self,
        block: &Block,
        position: BlockPosition,
        out: &mut String,
    ) -> Result<bool, AppError> {
        let indent = position.indent();

        match block {
            Block::Paragraph(p) => {
                if p.content.is_blank() {
                    return Ok(false);
                }
                write_prefixed_lines(out, &indent, &rich_text_to_markdown(&p.content.rich_text));
            }
            Block::Heading1(h) => writeln!(out, "{}# {}", indent, heading_text(&h.content))?,
            Block::Heading2(h) => writeln!(out, "{}## {}", indent, heading_text(&h.content))?,
            Block::Heading3(h) => writeln!(out, "{}### {}", indent, heading_text(&h.content))?,
            Block::BulletedListItem(item) => {
                let text = rich_text_to_markdown(&item.content.rich_text);
                write_list_item(out, &indent, "- ", &text);
            }
            Block::NumberedListItem(item) => {
                let text = rich_text_to_markdown(&item.content.rich_text);
                write_list_item(out, &indent, &numbered_marker(position), &text);
            }
            Block::ToDo(todo) => {
                let text = rich_text_to_markdown(&todo.content.rich_text);
                write_list_item(out, &indent, todo_marker(todo), &text);
            }
            // A list item, so the body nests under the summary instead of joining it
            Block::Toggle(toggle) => {
                let text = rich_text_to_markdown(&toggle.content.rich_text);
                write_list_item(out, &indent, "- ", &text);
            }
            Block::Quote(quote) => {
                let text = rich_text_to_markdown(&quote.content.rich_text);
                write_prefixed_lines(out, &format!("{}> ", indent), &text);
            }
            Block::Callout(callout) => {
                let text = rich_text_to_markdown(&callout.content.rich_text);
                let text = match &callout.icon {
                    Some(icon) => format!("{} {}", icon, text),
                    None => text,
                };
                write_prefixed_lines(out, &format!("{}> ", indent), &text);
            }
            Block::Code(code) => {
                writeln!(out, "{}```{}", indent, code.fence_language())?;
                let source = code.content.plain_text();
                if !source.is_empty() {
                    write_prefixed_lines(out, &indent, &source);
                }
                writeln!(out, "{}```", indent)?;
                let caption = rich_text_to_markdown(&code.caption);
                if !caption.trim().is_empty() {
                    write_prefixed_lines(out, &indent, &caption);
                }
            }
            Block::Equation(eq) => {
                writeln!(out, "{}$$", indent)?;
                write_prefixed_lines(out, &indent, &eq.expression);
                writeln!(out, "{}$$", indent)?;
            }
            Block::Divider(_) => writeln!(out, "{}---", indent)?,
            Block::Bookmark(bookmark) => {
                let caption = rich_text_to_markdown(&bookmark.caption);
                let label = if caption.trim().is_empty() {
                    bookmark.url.as_str()
                } else {
                    caption.as_str()
                };
                writeln!(out, "{}[{}]({})", indent, label, bookmark.url)?;
            }
            Block::ChildPage(page) => writeln!(out, "{}📄 {}", indent, page.title)?,
            Block::Unsupported(unsupported) => {
                log::debug!(
                    "Skipping unsupported block type '{}' in markdown",
                    unsupported.block_type
                );
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Children start at the parent's content column, which is what makes
    /// them nest under list items. Other parents get no extra indent: in
    /// markdown it would only turn their children into code blocks.
    fn child_indent(&self, block: &Block, position: BlockPosition) -> usize {
        match block {
            // The checkbox is item text, so to-dos nest like bullets
            Block::BulletedListItem(_) | Block::ToDo(_) | Block::Toggle(_) => 2,
            Block::NumberedListItem(_) => numbered_marker(position).len(),
            _ => 0,
        }
    }

    fn separates_nested_blocks(&self) -> bool {
        true
    }
}

fn numbered_marker(position: BlockPosition) -> String {
    format!("{}. ", position.list_number.unwrap_or(1))
}

fn todo_marker(todo: &ToDoBlock) -> &'static str {
    if todo.checked {
        "- [x] "
    } else {
        "- [ ] "
    }
}

/// Headings are single-line in markdown.
fn heading_text(content: &TextBlockContent) -> String {
    rich_text_to_markdown(&content.rich_text)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First line carries the marker; continuation lines align under the text.
fn write_list_item(out: &mut String, indent: &str, marker: &str, text: &str) {
    let mut lines = text.lines();
    out.push_str(indent);
    out.push_str(marker);
    out.push_str(lines.next().unwrap_or_default());
    out.push('\n');

    let continuation = format!("{}{}", indent, " ".repeat(marker.chars().count()));
    for line in lines {
        write_prefixed_lines(out, &continuation, line);
    }
}

/// Renders a whole article: title, tags line, then the body.
pub fn render_markdown(article: &Article) -> Result<String, AppError> {
    let mut output = String::new();
    writeln!(output, "# {}", article.title())?;
    writeln!(output)?;

    if !article.tags().is_empty() {
        let tags = article
            .tags()
            .iter()
            .map(|tag| code_span(tag))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(output, "Tags: {}", tags)?;
        writeln!(output)?;
    }

    output.push_str(&render_blocks(&MarkdownRenderer, &article.content)?);

    log::debug!(
        "Rendered '{}' as markdown: {} bytes",
        article.title(),
        output.len()
    );
    Ok(finish_document(output))
}
