mod block;
pub mod blocks;
pub mod common;

pub use block::Block;
pub use blocks::*;
pub use common::*;

use crate::types::PageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used when a page has no title property or an empty one.
pub const UNTITLED: &str = "Untitled";

/// One page matched by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: PageId,
    pub title: String,
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
    pub url: String,
}

/// Page-level facts about an article, independent of its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub id: PageId,
    pub title: String,
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
    pub url: String,
}

impl From<&ArticleMetadata> for SearchResult {
    fn from(meta: &ArticleMetadata) -> Self {
        Self {
            id: meta.id,
            title: meta.title.clone(),
            tags: meta.tags.clone(),
            created: meta.created,
            last_edited: meta.last_edited,
            url: meta.url.clone(),
        }
    }
}

/// A Notion page together with its full block tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub metadata: ArticleMetadata,
    pub content: Vec<Block>,
}

impl Article {
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    /// Number of blocks in the article, counting nested ones.
    pub fn block_count(&self) -> usize {
        self.content.iter().map(Block::subtree_len).sum()
    }
}
