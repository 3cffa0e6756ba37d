//! Character occurrence masks for a pattern
//!
//! For a pattern of length `m`, each distinct character maps to a bit
//! vector of `ceil(m/64)` chunks in which bit `i` is set wherever
//! `pattern[i]` is that character. Characters that never occur in the
//! pattern have no entry; the automaton treats a missing entry as the
//! zero vector.

use super::bitvec::{chunk_count, BitVec};
use ahash::AHashMap;

/// Build the per-character occurrence table for `pattern`.
#[must_use]
pub fn build_mask(pattern: &[char]) -> AHashMap<char, BitVec> {
    let chunks = chunk_count(pattern.len());
    let mut table: AHashMap<char, BitVec> = AHashMap::with_capacity(pattern.len().min(26));
    for (i, &c) in pattern.iter().enumerate() {
        table
            .entry(c)
            .or_insert_with(|| BitVec::zeroed(chunks))
            .set_bit(i);
    }
    table
}
