//! Simulator error definitions.
//!
//! This module defines the failures that can end a simulation. It provides:
//! 1. **Fatal Conditions:** Illegal instructions reaching Writeback.
//! 2. **Host Failures:** I/O, configuration and program-load errors.
//! 3. **Collaborator Failures:** Errors raised by the syscall emulation layer.
//!
//! Hazard stalls and divide-by-zero are not errors; they are resolved inside the pipeline.

use thiserror::Error;

/// Errors surfaced by the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// An unrecognized encoding reached Writeback.
    ///
    /// This is fatal: there is no recovery path and the driver must stop.
    #[error("illegal instruction {inst:#010x} at PC {pc:#010x}")]
    IllegalInstruction {
        /// Raw instruction word.
        inst: u32,
        /// Address of the instruction.
        pc: u32,
    },

    /// The syscall emulation layer could not service a trap.
    #[error("syscall {number} at PC {pc:#010x} failed: {reason}")]
    Syscall {
        /// Syscall number taken from `$v0`.
        number: u32,
        /// Address of the trapping instruction.
        pc: u32,
        /// Human-readable cause.
        reason: String,
    },

    /// The program image could not be parsed or placed in memory.
    #[error("cannot load program: {0}")]
    Load(String),

    /// A configuration document failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Host I/O failure (reading a program or config file, writing syscall output).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the simulator.
pub type Result<T> = std::result::Result<T, SimError>;
