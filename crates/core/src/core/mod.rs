//! Core BPE data structures and algorithms.
//!
//! This module contains adjacent-pair statistics and the merge table,
//! independent of any higher-level tokenizer API.

pub mod merges;
pub mod stats;

pub use merges::{MergeRule, MergeTable, Pair, BYTE_VOCAB_SIZE};
