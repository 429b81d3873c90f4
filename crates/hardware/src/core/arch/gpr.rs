//! MIPS General-Purpose Register File.
//!
//! This module implements a 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** `zero_r0` restores `$0` after a stage that may have written it.
//! 3. **Debugging:** Provides a hex/decimal dump of the complete register state.
//!
//! The same type backs both the architectural file and the Execute-side bypass copy.

use std::fmt::Write as _;

use crate::common::constants::NUM_REGS;
use crate::isa::abi::REG_NAMES;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx & (NUM_REGS - 1)]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `$0` land in storage; callers restore the invariant with
    /// [`Gpr::zero_r0`] before the end of their phase.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx & (NUM_REGS - 1)] = val;
    }

    /// Forces `$0` back to zero.
    #[inline]
    pub const fn zero_r0(&mut self) {
        self.regs[0] = 0;
    }

    /// Formats every register as `name: hex (decimal)`, one per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, val) in self.regs.iter().enumerate() {
            let _ = writeln!(
                out,
                " ${:<2} {:<4} {:08x} ({})",
                i,
                REG_NAMES[i],
                val,
                *val as i32
            );
        }
        out
    }
}
