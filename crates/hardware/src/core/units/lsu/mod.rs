//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit the Memory stage calls for every
//! memory operation. It includes:
//! - [`unaligned`]: The `lwl`/`lwr`/`swl`/`swr` partial-word merge rules.
//!
//! Every access reads the 8-byte word enclosing the address and picks the
//! big-endian sub-word out of it; stores read, modify and write that word back.

/// Partial-word (left/right) merge rules.
pub mod unaligned;

use crate::common::constants::WORD64_ALIGN_MASK;
use crate::core::pipeline::signals::MemOp;
use crate::soc::memory::{get_byte, get_half_word, get_word, set_byte, set_half_word, set_word};
use crate::soc::traits::Memory;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Performs a load.
    ///
    /// # Arguments
    ///
    /// * `mem`    - Backing store.
    /// * `op`     - Load form; store forms return `subreg` unchanged.
    /// * `addr`   - Effective byte address.
    /// * `subreg` - Current destination value, merged by `lwl`/`lwr`.
    ///
    /// # Returns
    ///
    /// The 32-bit value destined for the integer or float register.
    pub fn load(mem: &dyn Memory, op: MemOp, addr: u32, subreg: u32) -> u32 {
        let word = mem.read(addr & WORD64_ALIGN_MASK);
        match op {
            MemOp::Lb => i32::from(get_byte(addr, word) as u8 as i8) as u32,
            MemOp::Lbu => get_byte(addr, word),
            MemOp::Lh => i32::from(get_half_word(addr, word) as u16 as i16) as u32,
            MemOp::Lhu => get_half_word(addr, word),
            MemOp::Lw | MemOp::Lwc1 => get_word(addr, word),
            MemOp::Lwl => unaligned::merge_left(addr, get_word(addr, word), subreg),
            MemOp::Lwr => unaligned::merge_right(addr, get_word(addr, word), subreg),
            MemOp::Sb | MemOp::Sh | MemOp::Sw | MemOp::Swl | MemOp::Swr | MemOp::Swc1 => subreg,
        }
    }

    /// Performs a store as a read-modify-write of the enclosing 8-byte word.
    ///
    /// # Arguments
    ///
    /// * `mem`   - Backing store.
    /// * `op`    - Store form; load forms are ignored.
    /// * `addr`  - Effective byte address.
    /// * `value` - Register value being stored.
    pub fn store(mem: &mut dyn Memory, op: MemOp, addr: u32, value: u32) {
        let aligned = addr & WORD64_ALIGN_MASK;
        let word = mem.read(aligned);
        let updated = match op {
            MemOp::Sb => set_byte(addr, word, value),
            MemOp::Sh => set_half_word(addr, word, value),
            MemOp::Sw | MemOp::Swc1 => set_word(addr, word, value),
            MemOp::Swl => set_word(
                addr,
                word,
                unaligned::store_left(addr, get_word(addr, word), value),
            ),
            MemOp::Swr => set_word(
                addr,
                word,
                unaligned::store_right(addr, get_word(addr, word), value),
            ),
            _ => return,
        };
        mem.write(aligned, updated);
    }
}
