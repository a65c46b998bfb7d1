//! Adjacent-pair statistics over symbol sequences.
//!
//! Both training and encoding are driven by the same two primitives: counting
//! how often each adjacent pair occurs, and rewriting a sequence by merging
//! one pair into a single symbol.

use crate::core::merges::Pair;
use ahash::AHashMap;

/// Count every adjacent symbol pair in `ids`.
///
/// Overlapping occurrences each count: `[a, a, a]` yields `(a, a) -> 2`.
/// Sequences shorter than 2 produce an empty map.
pub fn pair_counts(ids: &[u32]) -> AHashMap<Pair, u64> {
    let mut counts = AHashMap::new();

    for window in ids.windows(2) {
        let pair = (window[0], window[1]);
        *counts.entry(pair).or_insert(0) += 1;
    }

    counts
}

/// Replace every non-overlapping occurrence of `pair` with `new_id`.
///
/// A single greedy left-to-right pass: once two symbols are merged, the
/// resulting symbol is not reconsidered within the same pass, so
/// `[a, a, a]` with pair `(a, a)` becomes `[new, a]`.
pub fn merge_pair(ids: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(ids.len());
    let mut i = 0;

    while i < ids.len() {
        if i + 1 < ids.len() && ids[i] == pair.0 && ids[i + 1] == pair.1 {
            out.push(new_id);
            i += 2;
        } else {
            out.push(ids[i]);
            i += 1;
        }
    }

    out
}
