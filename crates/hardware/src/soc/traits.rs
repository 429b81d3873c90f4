//! Memory collaborator interface.
//!
//! This module defines the `Memory` trait the pipeline uses for every fetch, load and store.
//! It provides:
//! 1. **Access:** Whole 8-byte word read/write at 8-byte-aligned addresses.
//! 2. **Image loading:** A default byte-wise `load_bytes` built on the word accessors.
//!
//! Sub-word access is composed by the caller with the big-endian helpers in
//! [`crate::soc::memory`]; implementations only ever see aligned addresses.

use crate::common::constants::WORD64_ALIGN_MASK;
use crate::soc::memory::set_byte;

/// Backing store addressed in aligned 64-bit words.
pub trait Memory: Send {
    /// Reads the 8-byte word at `addr`, which is 8-byte aligned.
    fn read(&self, addr: u32) -> u64;

    /// Writes the 8-byte word at `addr`, which is 8-byte aligned.
    fn write(&mut self, addr: u32, word: u64);

    /// Copies `data` into memory starting at byte address `base`.
    fn load_bytes(&mut self, base: u32, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            let addr = base.wrapping_add(i as u32);
            let aligned = addr & WORD64_ALIGN_MASK;
            let word = self.read(aligned);
            self.write(aligned, set_byte(addr, word, u32::from(*byte)));
        }
    }
}
