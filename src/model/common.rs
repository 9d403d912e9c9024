use super::Block;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Identity and nesting shared by every block kind.
///
/// `has_children` is what Notion reported; `children` is what was actually
/// fetched, which stays empty past the nesting limit and under child pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
    #[serde(default)]
    pub has_children: bool,
}

impl BlockCommon {
    /// A block with no nested content.
    pub fn new(id: BlockId) -> Self {
        Self::from_upstream(id, false)
    }

    /// A freshly converted block whose children have not been fetched yet.
    pub fn from_upstream(id: BlockId, has_children: bool) -> Self {
        Self {
            id,
            children: Vec::new(),
            has_children,
        }
    }

    /// False when Notion reported children that were never fetched.
    pub fn is_expanded(&self) -> bool {
        !self.has_children || !self.children.is_empty()
    }
}

// Locally built blocks (tests, benches) get a random identity.
impl Default for BlockCommon {
    fn default() -> Self {
        Self::new(BlockId::new_v4())
    }
}
