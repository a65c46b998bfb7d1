//! Bitok - High-level byte-level BPE tokenizer API
//!
//! This crate integrates the core algorithm and the trainer into a single
//! text <-> id-sequence codec, plus persistence for the textual merge-table
//! format.
//!
//! # Example
//!
//! ```rust
//! use bitok::Tokenizer;
//!
//! let tokenizer = Tokenizer::train("hello world hello world", 300, false)?;
//!
//! let ids = tokenizer.encode("hello");
//! assert_eq!(tokenizer.decode(&ids), "hello");
//! # Ok::<(), bitok::TokenizerError>(())
//! ```

// Re-export core types
pub use bitok_core::{MergeRule, MergeTable, Pair, Result, TokenizerError};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::Tokenizer;

// IO/Serialization
pub mod io;
pub use io::{load_merge_table, save_merge_table};
