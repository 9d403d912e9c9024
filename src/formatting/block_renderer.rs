// src/formatting/block_renderer.rs
//! Block rendering engine shared by the markdown and text renderers.
//!
//! The driver walks the block tree in document order, numbers runs of
//! numbered list items, and decides where blank lines go. Renderers only
//! turn one block into its own lines.

use crate::constants::{CHARS_PER_BLOCK_ESTIMATE, INDENT_SPACES};
use crate::error::AppError;
use crate::model::Block;

/// Where a block sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPosition {
    /// Nesting level; top-level blocks are at depth 0.
    pub depth: usize,
    /// Column the block starts at.
    pub column: usize,
    /// 1-based index within a run of consecutive numbered list items.
    pub list_number: Option<usize>,
}

impl BlockPosition {
    pub fn indent(&self) -> String {
        " ".repeat(self.column)
    }
}

/// Turns a single block into output lines.
pub trait BlockRenderer {
    /// Writes the block itself, not its children, with every line ending in `\n`.
    ///
    /// Returns `false` when the block produced no output.
    fn render_block(
        &self,
        block: &Block,
        position: BlockPosition,
        out: &mut String,
    ) -> Result<bool, AppError>;

    /// How far the block's children are indented past the block itself.
    fn child_indent(&self, _block: &Block, _position: BlockPosition) -> usize {
        INDENT_SPACES
    }

    /// Whether nested blocks get the same blank-line separation as top-level ones.
    fn separates_nested_blocks(&self) -> bool {
        false
    }
}

/// Renders a block tree with `renderer`.
pub fn render_blocks<R: BlockRenderer + ?Sized>(
    renderer: &R,
    blocks: &[Block],
) -> Result<String, AppError> {
    let estimated_capacity = blocks.len() * CHARS_PER_BLOCK_ESTIMATE;
    let mut output = String::with_capacity(estimated_capacity);
    render_level(renderer, blocks, 0, 0, &mut output)?;
    Ok(output)
}

fn render_level<R: BlockRenderer + ?Sized>(
    renderer: &R,
    blocks: &[Block],
    depth: usize,
    column: usize,
    out: &mut String,
) -> Result<(), AppError> {
    let nested_gaps = depth > 0 && renderer.separates_nested_blocks();
    let mut list_number = 0;
    let mut previous: Option<&Block> = None;

    for (i, block) in blocks.iter().enumerate() {
        let position = BlockPosition {
            depth,
            column,
            list_number: match block {
                Block::NumberedListItem(_) => {
                    list_number += 1;
                    Some(list_number)
                }
                _ => {
                    list_number = 0;
                    None
                }
            },
        };

        let start = out.len();
        let mut own = String::new();
        if renderer.render_block(block, position, &mut own)? {
            // A list run may follow its parent line directly; anything else starts a new block
            if nested_gaps && !(is_list_like(block) && previous.map_or(true, is_list_like)) {
                ensure_blank_line(out);
            }
            out.push_str(&own);
            previous = Some(block);
        }

        let child_column = column + renderer.child_indent(block, position);
        render_level(renderer, block.children(), depth + 1, child_column, out)?;

        // Top-level blocks are separated by a blank line, except inside a list run
        let continues_list = is_list_like(block) && blocks.get(i + 1).is_some_and(is_list_like);
        if depth == 0 && out.len() > start && !continues_list {
            ensure_blank_line(out);
        }
    }

    Ok(())
}

/// Ends the output with an empty line unless it already does.
fn ensure_blank_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
}

/// Blocks rendered as one line each, stacked without blank lines between them.
fn is_list_like(block: &Block) -> bool {
    matches!(
        block,
        Block::BulletedListItem(_) | Block::NumberedListItem(_) | Block::ToDo(_)
    )
}

/// Writes `text` line by line, each prefixed with `prefix`.
pub fn write_prefixed_lines(out: &mut String, prefix: &str, text: &str) {
    if text.is_empty() {
        out.push_str(prefix.trim_end());
        out.push('\n');
        return;
    }
    for line in text.lines() {
        if line.is_empty() {
            out.push_str(prefix.trim_end());
        } else {
            out.push_str(prefix);
            out.push_str(line);
        }
        out.push('\n');
    }
}

/// Collapses trailing whitespace so every rendering ends in exactly one newline.
pub fn finish_document(mut output: String) -> String {
    let trimmed_len = output.trim_end().len();
    output.truncate(trimmed_len);
    output.push('\n');
    output
}
