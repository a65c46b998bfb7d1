//! Encoding and decoding against a trained merge table.

pub mod byte_level;

pub use byte_level::{decode, encode};
