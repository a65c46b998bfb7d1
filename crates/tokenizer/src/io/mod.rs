//! Reading and writing the textual merge-table format.
//!
//! The model file is plain text, one rule per line in training order:
//! `"<left_id> <right_id> <new_id>"` as whitespace-separated decimal
//! integers, newline-terminated, with no header, comments, or blank lines.

pub mod load;
pub mod save;

pub use load::load_merge_table;
pub use save::save_merge_table;
