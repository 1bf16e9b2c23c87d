use crate::types::BlockId;

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockCommon {
    /// Absent only in hand-built or hand-edited payloads.
    pub id: Option<BlockId>,
    /// Reported by Notion; nested children are never fetched.
    pub has_children: bool,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            id: Some(id),
            has_children: false,
        }
    }
}
