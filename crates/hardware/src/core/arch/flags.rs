//! Register write-flag vector.
//!
//! Execute clears the vector at the start of every cycle and marks the register it
//! forwards into the bypass copy. Memory consults it one phase later: a load result
//! is only committed to the bypass copy when no newer instruction has already
//! written the same register.

use crate::common::constants::NUM_REGS;

/// One "written this cycle" bit per general-purpose register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteFlags {
    bits: [bool; NUM_REGS],
}

impl WriteFlags {
    /// Marks `idx` as written this cycle.
    pub fn set(&mut self, idx: usize) {
        self.bits[idx & (NUM_REGS - 1)] = true;
    }

    /// Returns whether `idx` was written this cycle.
    pub fn is_set(&self, idx: usize) -> bool {
        self.bits[idx & (NUM_REGS - 1)]
    }

    /// Clears every flag.
    pub fn clear(&mut self) {
        self.bits = [false; NUM_REGS];
    }

    /// Returns `true` when no flag is set.
    pub fn is_clear(&self) -> bool {
        self.bits.iter().all(|b| !b)
    }
}
