//! Bitok-core - Core byte-level BPE algorithm
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-pair encoding over raw bytes: adjacent-pair statistics, the immutable
//! [`MergeTable`] with its derived vocabulary, and deterministic
//! encode/decode against a trained table.
//!
//! Symbol ids 0-255 are fixed and stand for the raw byte values; every
//! learned merge is assigned the next id in training order, so a table with
//! `k` rules covers exactly the ids `0..256 + k`.
//!
//! # Example
//!
//! ```rust
//! use bitok_core::{encode, decode, MergeTable, MergeRule};
//!
//! // A table merging the byte pair "ab" into symbol 256.
//! let table = MergeTable::from_rules(vec![MergeRule {
//!     left: b'a' as u32,
//!     right: b'b' as u32,
//!     new_id: 256,
//! }])?;
//!
//! let ids = encode(&table, "abab");
//! assert_eq!(ids, vec![256, 256]);
//! assert_eq!(decode(&table, &ids), "abab");
//! # Ok::<(), bitok_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use core::{MergeRule, MergeTable, Pair, BYTE_VOCAB_SIZE};

// Encoding/decoding against a trained table
pub mod encoding;
pub use encoding::{decode, encode};
