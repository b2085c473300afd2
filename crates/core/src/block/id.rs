use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque block identifier.
///
/// Minted editor-side when a block is created; stable across reorders and
/// data edits, never reused after deletion. Stored verbatim in the wire
/// format, so historical ids of any shape remain valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Mint a fresh identifier for a newly created block.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = BlockId::fresh();
        let b = BlockId::fresh();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn historical_ids_pass_through() {
        let id = BlockId::from("block-1694791200000");
        assert_eq!(id.as_str(), "block-1694791200000");
        assert_eq!(id.to_string(), "block-1694791200000");
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let id = BlockId::from("abc");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("abc"));
    }
}
