//! Sparse flat memory.
//!
//! MIPS programs touch a text segment near `0x0040_0000`, data above it and a stack
//! just below `0x8000_0000`. Storing only the words that were written keeps the whole
//! 4 GiB space addressable without reserving it.

use std::collections::HashMap;

use crate::common::constants::WORD64_ALIGN_MASK;
use crate::soc::traits::Memory;

/// Flat memory of aligned 8-byte words; unwritten words read as zero.
#[derive(Clone, Debug, Default)]
pub struct FlatMemory {
    words: HashMap<u32, u64>,
}

impl FlatMemory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of 8-byte words that have been written.
    pub fn resident_words(&self) -> usize {
        self.words.len()
    }
}

impl Memory for FlatMemory {
    fn read(&self, addr: u32) -> u64 {
        self.words
            .get(&(addr & WORD64_ALIGN_MASK))
            .copied()
            .unwrap_or(0)
    }

    fn write(&mut self, addr: u32, word: u64) {
        let _ = self.words.insert(addr & WORD64_ALIGN_MASK, word);
    }
}
