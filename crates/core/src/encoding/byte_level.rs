//! Byte-level encode/decode.
//!
//! Encoding replays learned merges over the raw bytes of the input; decoding
//! concatenates the cached byte expansion of each symbol. Both are pure
//! functions of `(input, table)`.

use crate::core::merges::MergeTable;
use crate::core::stats;

/// Encode text into symbol ids by replaying learned merges.
///
/// Every input byte is a valid initial symbol (0-255), so nothing is ever
/// unencodable. Merges apply in training order: each round applies the one
/// rule with the smallest id among the pairs currently present, so a merge
/// learned earlier always wins over a later one regardless of how often
/// either pair occurs in this input. Empty text encodes to an empty sequence.
pub fn encode(table: &MergeTable, text: &str) -> Vec<u32> {
    let mut ids: Vec<u32> = text.bytes().map(u32::from).collect();

    while ids.len() >= 2 {
        let counts = stats::pair_counts(&ids);

        // Earliest-trained rule among the pairs present. New ids are unique
        // per pair, so the minimum is unambiguous no matter the map order.
        let next = counts
            .keys()
            .filter_map(|&pair| table.get(pair).map(|new_id| (new_id, pair)))
            .min_by_key(|&(new_id, _)| new_id);

        match next {
            Some((new_id, pair)) => ids = stats::merge_pair(&ids, pair, new_id),
            None => break,
        }
    }

    ids
}

/// Decode symbol ids back into text.
///
/// Two deliberately lossy behaviors, neither an error: ids outside the table
/// are silently skipped, and byte runs that are not valid UTF-8 decode as
/// U+FFFD replacement characters.
pub fn decode(table: &MergeTable, ids: &[u32]) -> String {
    let mut bytes = Vec::with_capacity(ids.len());

    for &id in ids {
        if let Some(token) = table.token_bytes(id) {
            bytes.extend_from_slice(token);
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::merges::MergeRule;

    fn table(rules: Vec<(u32, u32)>) -> MergeTable {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(rank, (left, right))| MergeRule {
                left,
                right,
                new_id: 256 + rank as u32,
            })
            .collect();
        MergeTable::from_rules(rules).unwrap()
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&MergeTable::empty(), ""), Vec::<u32>::new());
    }

    #[test]
    fn test_encode_no_rules() {
        let ids = encode(&MergeTable::empty(), "abc");
        assert_eq!(ids, vec![97, 98, 99]);
    }

    #[test]
    fn test_encode_applies_merges() {
        let table = table(vec![(97, 98)]);
        assert_eq!(encode(&table, "abab"), vec![256, 256]);
        assert_eq!(encode(&table, "aXb"), vec![97, 88, 98]);
    }

    #[test]
    fn test_training_order_precedence() {
        // ("a","b") -> 256 was trained before ("b","c") -> 257, so encoding
        // "abc" consumes the "b" with the earlier rule and "bc" never merges.
        let table = table(vec![(97, 98), (98, 99)]);
        assert_eq!(encode(&table, "abc"), vec![256, 99]);

        // The later rule still applies where the earlier one cannot.
        assert_eq!(encode(&table, "bc"), vec![257]);
    }

    #[test]
    fn test_encode_cascading_merges() {
        let table = table(vec![(97, 97), (256, 98)]);
        assert_eq!(encode(&table, "aab"), vec![257]);
        assert_eq!(encode(&table, "aabaab"), vec![257, 257]);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(&MergeTable::empty(), &[]), "");
    }

    #[test]
    fn test_decode_skips_unknown_ids() {
        let table = table(vec![(97, 98)]);
        // 999 has no vocabulary entry and is dropped
        assert_eq!(decode(&table, &[256, 999, 99]), "abc");
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        // 0xC3 alone is a truncated UTF-8 sequence
        let decoded = decode(&MergeTable::empty(), &[0xC3]);
        assert_eq!(decoded, "\u{FFFD}");
    }

    #[test]
    fn test_roundtrip() {
        let table = table(vec![(97, 98), (256, 99)]);
        for text in ["", "abc", "hello world", "ababc", "日本語テキスト"] {
            assert_eq!(decode(&table, &encode(&table, text)), text);
        }
    }

    #[test]
    fn test_multibyte_input() {
        // UTF-8 input is treated purely as bytes
        let ids = encode(&MergeTable::empty(), "é");
        assert_eq!(ids, vec![0xC3, 0xA9]);
        assert_eq!(decode(&MergeTable::empty(), &ids), "é");
    }
}
