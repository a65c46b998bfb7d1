//! Merge rules and the derived vocabulary.
//!
//! A [`MergeTable`] is the persisted state of a trained tokenizer: the
//! ordered list of learned merge rules plus the id -> bytes vocabulary
//! derived from them. Tables are immutable once constructed, so they can be
//! shared across any number of encoders and decoders without coordination.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;

/// A pair of symbol ids that can be merged.
pub type Pair = (u32, u32);

/// Number of fixed byte-valued symbols preceding any learned id.
pub const BYTE_VOCAB_SIZE: u32 = 256;

/// A single learned merge: `(left, right)` rewrites to `new_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRule {
    pub left: u32,
    pub right: u32,
    pub new_id: u32,
}

/// Ordered merge rules plus the derived vocabulary.
///
/// Rules keep their training order; the rule at position `i` always owns id
/// `256 + i`. The vocabulary is computed once at construction and cached, so
/// decoding stays linear in sequence length.
#[derive(Debug, Clone)]
pub struct MergeTable {
    /// Rules in training order
    rules: Vec<MergeRule>,
    /// Pair -> new symbol id, for rule lookup during encoding
    merges: AHashMap<Pair, u32>,
    /// Symbol id -> raw bytes, indexed by id
    vocab: Vec<Vec<u8>>,
}

impl MergeTable {
    /// Create a table with no learned merges.
    ///
    /// Encoding against it passes raw bytes through unchanged.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            merges: AHashMap::new(),
            vocab: byte_vocab(),
        }
    }

    /// Build a table from rules in training order.
    ///
    /// Validates the id invariants: every `new_id` must equal `256 + position`,
    /// both operands must already be defined at that point, and no pair key
    /// may repeat. The reported line number is the rule's 1-based position,
    /// which matches its line in the on-disk format.
    pub fn from_rules(rules: Vec<MergeRule>) -> Result<Self> {
        let mut merges = AHashMap::with_capacity(rules.len());
        let mut vocab = byte_vocab();

        for (rank, rule) in rules.iter().enumerate() {
            let line = rank + 1;
            let expected = BYTE_VOCAB_SIZE + rank as u32;

            if rule.new_id != expected {
                return Err(TokenizerError::MalformedRecord {
                    line,
                    reason: format!(
                        "new id {} out of order, expected {}",
                        rule.new_id, expected
                    ),
                });
            }

            for operand in [rule.left, rule.right] {
                if operand >= expected {
                    return Err(TokenizerError::MalformedRecord {
                        line,
                        reason: format!("undefined symbol id {operand}"),
                    });
                }
            }

            if merges.insert((rule.left, rule.right), rule.new_id).is_some() {
                return Err(TokenizerError::MalformedRecord {
                    line,
                    reason: format!("duplicate pair ({}, {})", rule.left, rule.right),
                });
            }

            let token = [
                vocab[rule.left as usize].as_slice(),
                vocab[rule.right as usize].as_slice(),
            ]
            .concat();
            vocab.push(token);
        }

        Ok(Self {
            rules,
            merges,
            vocab,
        })
    }

    /// Get the learned id for a pair, if a rule exists.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<u32> {
        self.merges.get(&pair).copied()
    }

    /// Bytes a symbol id expands to, or `None` for ids outside the table.
    #[inline]
    pub fn token_bytes(&self, id: u32) -> Option<&[u8]> {
        self.vocab.get(id as usize).map(Vec::as_slice)
    }

    /// Rules in training order.
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Number of learned merge rules.
    #[inline]
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Total vocabulary size: 256 byte symbols plus one per rule.
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

/// The fixed base vocabulary: id 0-255 each map to their single byte.
fn byte_vocab() -> Vec<Vec<u8>> {
    (0u8..=255).map(|b| vec![b]).collect()
}
