//! Bitok-training - BPE training
//!
//! This crate provides the training loop that learns merge rules from text,
//! producing an immutable [`bitok_core::MergeTable`].
//!
//! # Example
//!
//! ```rust
//! use bitok_training::{MergeTrainer, TrainingConfig};
//!
//! let trainer = MergeTrainer::new(TrainingConfig {
//!     vocab_size: 300,
//!     verbose: false,
//! });
//! let table = trainer.train("hello world hello world")?;
//! assert!(table.vocab_size() >= 256);
//! # Ok::<(), bitok_training::TokenizerError>(())
//! ```

pub use bitok_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{MergeTrainer, TrainingConfig};
