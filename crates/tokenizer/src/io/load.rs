//! Load functionality for persisted merge tables.

use bitok_core::{MergeRule, MergeTable, Result, TokenizerError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a merge table from `path`.
///
/// Records are applied in file order and the vocabulary is rebuilt
/// incrementally, so a record may only reference ids already defined above
/// it. A missing file is `NotFound`; a line that does not parse as exactly
/// three integers, or that fails the id invariants, is `MalformedRecord`
/// with its 1-based line number. The file handle is scoped to this function
/// and released on every exit path.
pub fn load_merge_table(path: &Path) -> Result<MergeTable> {
    if !path.exists() {
        return Err(TokenizerError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|err| TokenizerError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    let reader = BufReader::new(file);

    let mut rules = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        rules.push(parse_record(&line, index + 1)?);
    }

    MergeTable::from_rules(rules)
}

/// Parse one `"<left> <right> <new_id>"` line.
fn parse_record(line: &str, line_no: usize) -> Result<MergeRule> {
    let mut fields = line.split_whitespace();
    let mut next_id = |name: &str| -> Result<u32> {
        let field = fields
            .next()
            .ok_or_else(|| TokenizerError::MalformedRecord {
                line: line_no,
                reason: format!("missing {name}"),
            })?;
        field
            .parse()
            .map_err(|_| TokenizerError::MalformedRecord {
                line: line_no,
                reason: format!("{name} is not a decimal integer: '{field}'"),
            })
    };

    let left = next_id("left id")?;
    let right = next_id("right id")?;
    let new_id = next_id("new id")?;

    if fields.next().is_some() {
        return Err(TokenizerError::MalformedRecord {
            line: line_no,
            reason: "expected exactly three integers".to_string(),
        });
    }

    Ok(MergeRule {
        left,
        right,
        new_id,
    })
}
