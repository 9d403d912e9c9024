use super::common::BlockCommon;
use crate::types::{plain_text_of, RichTextItem};
use serde::{Deserialize, Serialize};

/// The styled text runs of a text-bearing block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }

    /// One unstyled run.
    pub fn plain(text: &str) -> Self {
        Self::new(vec![RichTextItem::plain_text(text)])
    }

    pub fn plain_text(&self) -> String {
        plain_text_of(&self.rich_text)
    }

    pub fn is_blank(&self) -> bool {
        self.rich_text.iter().all(|item| item.plain_text.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParagraphBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Shared by `heading_1`, `heading_2` and `heading_3`; the level lives in the `Block` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Carries no number of its own; numbering comes from the item's position in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Rendered expanded: the summary line followed by its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
    /// Emoji icon; file and external icons are dropped.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
    /// Notion's language name, e.g. `rust` or `plain text`.
    pub language: String,
    pub caption: Vec<RichTextItem>,
}

impl CodeBlock {
    /// Info string for a markdown fence; Notion's "plain text" has none.
    pub fn fence_language(&self) -> &str {
        match self.language.as_str() {
            "plain text" => "",
            language => language,
        }
    }
}

/// A display equation in KaTeX syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationBlock {
    pub common: BlockCommon,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerBlock {
    pub common: BlockCommon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlock {
    pub common: BlockCommon,
    pub url: String,
    pub caption: Vec<RichTextItem>,
}

/// A nested page, shown by title only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPageBlock {
    pub common: BlockCommon,
    pub title: String,
}

/// Kept so its children still render and its type shows up in json output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    /// Notion's `type` string, e.g. `table` or `synced_block`.
    pub block_type: String,
}
