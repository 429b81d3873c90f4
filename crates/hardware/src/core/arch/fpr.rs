//! MIPS Floating-Point Register File.
//!
//! This module implements the coprocessor-1 register file. It performs the following:
//! 1. **Storage:** 32 single-precision registers (`$f0`-`$f31`) held as raw bits.
//! 2. **Pairing:** Even/odd pairs form the 16 double-precision registers, low word in the even register.

use crate::common::constants::NUM_REGS;

/// Floating-Point Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fpr {
    fregs: [u32; NUM_REGS],
}

impl Fpr {
    /// Creates a new float register file with all registers set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a single-precision register as raw bits.
    pub fn read(&self, idx: usize) -> u32 {
        self.fregs[idx & (NUM_REGS - 1)]
    }

    /// Writes a single-precision register from raw bits.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.fregs[idx & (NUM_REGS - 1)] = val;
    }

    /// Reads the double-precision register formed by the pair containing `idx`.
    ///
    /// # Returns
    ///
    /// The 64-bit IEEE 754 bit pattern, high word from the odd register.
    pub fn read_double(&self, idx: usize) -> u64 {
        let even = idx & (NUM_REGS - 2);
        (u64::from(self.fregs[even + 1]) << 32) | u64::from(self.fregs[even])
    }

    /// Reads a single-precision register as an `f32`.
    pub fn read_single_f32(&self, idx: usize) -> f32 {
        f32::from_bits(self.read(idx))
    }

    /// Reads a double-precision pair as an `f64`.
    pub fn read_double_f64(&self, idx: usize) -> f64 {
        f64::from_bits(self.read_double(idx))
    }
}
