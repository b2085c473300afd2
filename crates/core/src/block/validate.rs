//! Save-boundary checks for stored block arrays. Field content is never
//! validated here; malformed field values degrade at render time instead.

use std::collections::HashSet;

use thiserror::Error;

use super::model::ContentBlock;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("block id cannot be empty")]
    EmptyId,
    #[error("duplicate block id: {0}")]
    DuplicateId(String),
}

/// Validate the invariants a block array must satisfy before it is written:
/// every id non-empty and unique within the array. Arrays produced through
/// the editor always pass; this guards direct API writes.
pub fn validate_block_list(blocks: &[ContentBlock]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for block in blocks {
        if block.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if !seen.insert(block.id.as_str()) {
            return Err(ValidationError::DuplicateId(block.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::id::BlockId;
    use crate::block::registry::BlockKind;

    fn block(id: &str, kind: BlockKind) -> ContentBlock {
        ContentBlock::new(BlockId::from(id), kind.default_body())
    }

    #[test]
    fn accepts_unique_ids() {
        let blocks = vec![block("a", BlockKind::Text), block("b", BlockKind::Faq)];
        assert_eq!(validate_block_list(&blocks), Ok(()));
    }

    #[test]
    fn accepts_empty_array() {
        assert_eq!(validate_block_list(&[]), Ok(()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let blocks = vec![block("a", BlockKind::Text), block("a", BlockKind::Cta)];
        assert_eq!(
            validate_block_list(&blocks),
            Err(ValidationError::DuplicateId("a".into()))
        );
    }

    #[test]
    fn rejects_empty_id() {
        let blocks = vec![block("", BlockKind::Text)];
        assert_eq!(validate_block_list(&blocks), Err(ValidationError::EmptyId));
    }
}
