//! Collision detection across a whole generation run

use crate::io::error::{GenerationError, Result};
use crate::sampling::attributes::AttributeTuple;
use std::collections::HashMap;

/// Keys of every combination produced so far, with the item that produced it
#[derive(Debug, Clone, Default)]
pub struct CollisionSet {
    seen: HashMap<String, usize>,
}

impl CollisionSet {
    /// Create an empty collision set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the combination of item `index`, rejecting repeats
    ///
    /// The set is left unchanged when a collision is reported.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTraitCombination` if an earlier item produced the
    /// same key
    pub fn check_uniqueness(&mut self, index: usize, attributes: &AttributeTuple) -> Result<()> {
        let key = attributes.key();
        if let Some(&first_index) = self.seen.get(&key) {
            return Err(GenerationError::DuplicateTraitCombination {
                index,
                first_index,
                key,
            });
        }
        self.seen.insert(key, index);
        Ok(())
    }

    /// Check whether a key has been recorded
    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains_key(key)
    }

    /// Number of recorded combinations
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
