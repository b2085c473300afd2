//! The editing session over one page+language block array.
//!
//! All mutations are synchronous and applied in call order. The session
//! holds no persistence: the owner reads [`EditorSession::blocks`] after a
//! change (the [`EditorSession::version`] counter is the change signal) and
//! saves the array wholesale when the operator asks for it.

use std::collections::HashSet;

use thiserror::Error;

use super::id::BlockId;
use super::model::{BlockBody, ContentBlock};
use super::registry::BlockKind;

#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("no block with id {0}")]
    UnknownBlock(String),
    #[error("block {id} is a {actual} block; kind is fixed at creation")]
    KindMismatch { id: String, actual: String },
}

/// One operator's in-memory editing session.
///
/// Expand/collapse and drag state are view concerns kept alongside the
/// array; they never reach the serialized block data.
#[derive(Debug, Default)]
pub struct EditorSession {
    blocks: Vec<ContentBlock>,
    expanded: HashSet<BlockId>,
    version: u64,
}

impl EditorSession {
    /// Open a session over a stored block array.
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self {
            blocks,
            expanded: HashSet::new(),
            version: 0,
        }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    /// Bumped on every structural or data change; view-state toggles do
    /// not count.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Append a new block of `kind` with a fresh id and its default data.
    /// The new block starts expanded so its form is immediately visible.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId::fresh();
        self.blocks
            .push(ContentBlock::new(id.clone(), kind.default_body()));
        self.expanded.insert(id.clone());
        self.version += 1;
        id
    }

    /// Remove the block with `id`. Returns whether anything was removed.
    /// Confirmation, if any, is the caller's concern.
    pub fn delete_block(&mut self, id: &BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| &b.id != id);
        self.expanded.remove(id);
        let removed = self.blocks.len() != before;
        if removed {
            self.version += 1;
        }
        removed
    }

    /// Move the block at `from` to position `to`, preserving the relative
    /// order of everything else. Out-of-range indices are rejected.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.blocks.len() || to >= self.blocks.len() {
            return false;
        }
        if from == to {
            return true;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.version += 1;
        true
    }

    /// Wholesale-replace a block's data. The per-kind sub-forms produce a
    /// complete data record, so unrelated fields survive on their side.
    pub fn update_data(&mut self, id: &BlockId, body: BlockBody) -> Result<(), EditorError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| EditorError::UnknownBlock(id.to_string()))?;
        if block.body.kind() != body.kind() {
            return Err(EditorError::KindMismatch {
                id: id.to_string(),
                actual: block.body.kind().to_string(),
            });
        }
        block.body = body;
        self.version += 1;
        Ok(())
    }

    /// Toggle whether a block's inline form is visible. View state only.
    pub fn toggle_expanded(&mut self, id: &BlockId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &BlockId) -> bool {
        self.expanded.contains(id)
    }
}
