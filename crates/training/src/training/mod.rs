//! Training infrastructure for the byte-level BPE tokenizer.

pub mod trainer;

pub use trainer::{MergeTrainer, TrainingConfig};
