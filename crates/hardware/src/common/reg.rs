//! Pipeline Register File.
//!
//! This module provides the `RegisterFile` struct, which bundles every register the
//! pipeline touches. It provides:
//! 1. **Architectural state:** The committed GPR file, float registers, Hi and Lo.
//! 2. **Bypass copy:** A second GPR file that Execute and Memory write early so
//!    later instructions observe results before Writeback commits them.
//! 3. **Write flags:** The per-register vector that arbitrates deferred load commits.
//!
//! Ownership per phase: Execute and Memory write `bypass` and `flags`; Writeback writes
//! `gpr`, `fpr`, `hi` and `lo`, and after a syscall re-synchronizes `bypass` from `gpr`.

use crate::core::arch::flags::WriteFlags;
use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;

/// All registers visible to the pipeline.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    /// Committed general-purpose registers.
    pub gpr: Gpr,
    /// Forwarding copy read by Execute and store data in Memory.
    pub bypass: Gpr,
    /// Coprocessor-1 registers.
    pub fpr: Fpr,
    /// Multiply high word / divide remainder.
    pub hi: u32,
    /// Multiply low word / divide quotient.
    pub lo: u32,
    /// Registers forwarded into `bypass` by Execute this cycle.
    pub flags: WriteFlags,
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a committed general-purpose register.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a value to both the committed file and the bypass copy.
    ///
    /// Used by the loader and the syscall layer, which act while the pipeline is drained.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
        self.bypass.write(idx, val);
        self.zero_r0();
    }

    /// Copies the committed file over the bypass copy.
    pub fn refresh_bypass(&mut self) {
        self.bypass.clone_from(&self.gpr);
    }

    /// Restores `$0 == 0` in both integer files.
    pub const fn zero_r0(&mut self) {
        self.gpr.zero_r0();
        self.bypass.zero_r0();
    }
}
