//! Save functionality for trained merge tables.

use bitok_core::{MergeTable, Result, TokenizerError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `table` to `path` in the textual model format.
///
/// Rules are written in training order, so line `n` always defines id
/// `255 + n` and a loader can rebuild the vocabulary in one pass.
pub fn save_merge_table(table: &MergeTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|err| TokenizerError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    let mut writer = BufWriter::new(file);

    for rule in table.rules() {
        writeln!(writer, "{} {} {}", rule.left, rule.right, rule.new_id).map_err(|err| {
            TokenizerError::Io {
                path: path.to_path_buf(),
                err,
            }
        })?;
    }

    writer.flush().map_err(|err| TokenizerError::Io {
        path: path.to_path_buf(),
        err,
    })
}
