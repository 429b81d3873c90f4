//! Syscall Trap Interface.
//!
//! This module defines how a `syscall` reaching Writeback is serviced. It provides:
//! 1. **Handler Trait:** The collaborator Writeback calls synchronously with the
//!    architectural state.
//! 2. **Return Conventions:** Helpers for the o32 return registers and exit requests.
//!
//! When the handler runs, every instruction behind the trap is a bubble, so the
//! committed register file is the complete program state. Writeback replays the
//! squashed fetch and re-synchronizes the bypass copy once the handler returns.

use super::Cpu;
use crate::common::Result;
use crate::isa::abi;

/// Services `syscall` instructions on behalf of the simulated program.
pub trait SyscallHandler {
    /// Handles one trap.
    ///
    /// # Arguments
    ///
    /// * `cpu`  - Architectural state; the syscall number is in `$v0`.
    /// * `inst` - The raw `syscall` word (its code field is available to the handler).
    ///
    /// # Errors
    ///
    /// Any error halts the simulation.
    fn handle(&mut self, cpu: &mut Cpu, inst: u32) -> Result<()>;
}

impl Cpu {
    /// Asks the driver to stop after the current cycle with `code`.
    pub const fn request_exit(&mut self, code: u32) {
        self.exit_code = Some(code);
    }

    /// Writes a syscall result using the o32 convention.
    ///
    /// `$v0` receives `value` and `$a3` is 1 on failure, 0 on success.
    pub fn syscall_return(&mut self, value: u32, failed: bool) {
        self.regs.write(abi::REG_V0, value);
        self.regs.write(abi::REG_A3, u32::from(failed));
    }
}
