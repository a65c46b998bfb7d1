//! Main tokenizer implementation.
//!
//! This module provides the high-level [`Tokenizer`] struct that wraps a
//! trained [`MergeTable`] behind the text <-> id-sequence operations
//! downstream consumers (model training, data loaders, export tooling) use.

use crate::io;
use bitok_core::{decode, encode, MergeTable, Result};
use bitok_training::{MergeTrainer, TrainingConfig};
use std::path::Path;

/// A trained byte-level BPE tokenizer.
///
/// Holds an immutable merge table; once constructed (by training, loading,
/// or wrapping an existing table) a tokenizer is read-only and can be shared
/// across threads without coordination.
pub struct Tokenizer {
    table: MergeTable,
}

impl Tokenizer {
    /// Train a tokenizer on `text` with the given target vocabulary size.
    ///
    /// With `verbose` set, one line is printed per learned merge.
    pub fn train(text: &str, vocab_size: usize, verbose: bool) -> Result<Self> {
        let trainer = MergeTrainer::new(TrainingConfig {
            vocab_size,
            verbose,
        });
        Ok(Self {
            table: trainer.train(text)?,
        })
    }

    /// Wrap an existing merge table, e.g. one a consumer embedded in a model
    /// checkpoint and rebuilt through [`MergeTable::from_rules`].
    pub fn from_table(table: MergeTable) -> Self {
        Self { table }
    }

    /// Encode text into symbol ids.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        encode(&self.table, text)
    }

    /// Decode symbol ids back into text.
    ///
    /// Unknown ids are skipped and invalid byte runs decode as U+FFFD; see
    /// [`bitok_core::decode`].
    pub fn decode(&self, ids: &[u32]) -> String {
        decode(&self.table, ids)
    }

    /// Total vocabulary size: 256 byte symbols plus one per learned merge.
    pub fn vocab_size(&self) -> usize {
        self.table.vocab_size()
    }

    /// Save the merge table to `path` in the textual model format.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_merge_table(&self.table, path)
    }

    /// Load a tokenizer from a model file produced by [`Tokenizer::save`].
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            table: io::load_merge_table(path)?,
        })
    }

    /// The underlying merge table.
    pub fn table(&self) -> &MergeTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitok_core::{MergeRule, MergeTable};
    use proptest::prelude::*;

    #[test]
    fn test_train_fixture() {
        let tokenizer = Tokenizer::train("aaabdaaabac", 259, false).unwrap();

        assert_eq!(tokenizer.vocab_size(), 259);
        assert_eq!(tokenizer.encode("aaabdaaabac"), vec![258, 100, 258, 97, 99]);
        assert_eq!(tokenizer.decode(&[258, 100, 258, 97, 99]), "aaabdaaabac");
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::train("some corpus text", 300, false).unwrap();
        assert_eq!(tokenizer.encode(""), Vec::<u32>::new());
        assert_eq!(tokenizer.decode(&[]), "");
    }

    #[test]
    fn test_roundtrip_clean_text() {
        let corpus = "low lower lowest new newer newest wide wider widest";
        let tokenizer = Tokenizer::train(corpus, 300, false).unwrap();

        for text in [corpus, "low and wide", "never seen words", "日本語"] {
            assert_eq!(tokenizer.decode(&tokenizer.encode(text)), text);
        }
    }

    #[test]
    fn test_reencode_idempotent() {
        let tokenizer = Tokenizer::train("abab ababab abab", 280, false).unwrap();
        let text = "ababab and more abab";

        let once = tokenizer.encode(text);
        let again = tokenizer.encode(&tokenizer.decode(&once));
        assert_eq!(again, once);
    }

    #[test]
    fn test_from_table() {
        let table = MergeTable::from_rules(vec![MergeRule {
            left: 104,
            right: 105,
            new_id: 256,
        }])
        .unwrap();

        let tokenizer = Tokenizer::from_table(table);
        assert_eq!(tokenizer.vocab_size(), 257);
        assert_eq!(tokenizer.encode("hi"), vec![256]);
    }

    #[test]
    fn test_chunked_encoding_matches_whole() {
        // The encoder carries no state across calls, so chunking at a
        // boundary no rule spans yields the same ids as the whole input.
        let tokenizer = Tokenizer::train("ab ab ab", 257, false).unwrap();

        let whole = tokenizer.encode("ab ab");
        let mut chunked = tokenizer.encode("ab ");
        chunked.extend(tokenizer.encode("ab"));
        assert_eq!(chunked, whole);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(text in ".*") {
            let tokenizer = Tokenizer::train("abra kadabra abra", 280, false).unwrap();
            prop_assert_eq!(tokenizer.decode(&tokenizer.encode(&text)), text);
        }
    }
}
