use super::blocks::*;
use super::common::BlockCommon;
use crate::types::{BlockId, RichTextItem};
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Equation($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Bookmark($pattern) => $result,
            Block::ChildPage($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// The Notion block kinds an article body can be made of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(HeadingBlock),
    Heading2(HeadingBlock),
    Heading3(HeadingBlock),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Quote(QuoteBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Equation(EquationBlock),
    Divider(DividerBlock),
    Bookmark(BookmarkBlock),
    ChildPage(ChildPageBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    /// Get the block's children
    pub fn children(&self) -> &[Block] {
        match_all_blocks!(self, b => &b.common.children)
    }

    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    pub fn common_mut(&mut self) -> &mut BlockCommon {
        match_all_blocks!(self, b => &mut b.common)
    }

    /// Attach fetched children. `has_children` keeps the upstream flag.
    pub fn set_children(&mut self, children: Vec<Block>) {
        self.common_mut().children = children;
    }

    /// Notion's name for the block type
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Equation(_) => "equation",
            Block::Divider(_) => "divider",
            Block::Bookmark(_) => "bookmark",
            Block::ChildPage(_) => "child_page",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// The block's primary rich text, if it has any.
    pub fn rich_text(&self) -> &[RichTextItem] {
        match self {
            Block::Paragraph(b) => &b.content.rich_text,
            Block::Heading1(b) | Block::Heading2(b) | Block::Heading3(b) => &b.content.rich_text,
            Block::BulletedListItem(b) => &b.content.rich_text,
            Block::NumberedListItem(b) => &b.content.rich_text,
            Block::ToDo(b) => &b.content.rich_text,
            Block::Toggle(b) => &b.content.rich_text,
            Block::Quote(b) => &b.content.rich_text,
            Block::Callout(b) => &b.content.rich_text,
            Block::Code(b) => &b.content.rich_text,
            Block::Bookmark(b) => &b.caption,
            Block::Equation(_) | Block::Divider(_) | Block::ChildPage(_) | Block::Unsupported(_) => {
                &[]
            }
        }
    }

    /// Plain text of the block with all formatting dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Equation(b) => b.expression.clone(),
            Block::ChildPage(b) => b.title.clone(),
            _ => crate::types::plain_text_of(self.rich_text()),
        }
    }

    /// Total number of blocks in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Block::subtree_len)
            .sum::<usize>()
    }
}
