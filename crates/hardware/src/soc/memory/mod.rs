//! Flat System Memory.
//!
//! This module implements the backing store used by the pipeline. It provides:
//! 1. **Endian helpers:** Pure big-endian byte/half-word/word extract and insert on an 8-byte word.
//! 2. **FlatMemory:** A sparse array of aligned 8-byte words; unwritten words read as zero.

/// Big-endian sub-word helpers.
pub mod endian;

/// Sparse flat memory implementation.
pub mod flat;

pub use endian::{get_byte, get_half_word, get_word, set_byte, set_half_word, set_word};
pub use flat::FlatMemory;
