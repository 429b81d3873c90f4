//! Core processor implementation.
//!
//! This module contains the CPU state, the two-phase pipeline, the register
//! building blocks and the functional units the stages call into.

/// Register building blocks (general, float, write flags).
pub mod arch;

/// CPU state, syscall trap interface and state dumps.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Functional units (ALU, branch unit, load/store unit).
pub mod units;

pub use self::cpu::Cpu;
