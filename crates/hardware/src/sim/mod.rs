//! Simulation driver, program loading and syscall emulation.
//!
//! Provides the tick loop that drives the pipeline, utilities for placing a
//! program in memory, and the default syscall collaborator.

/// ELF and raw image loading.
pub mod loader;

/// Two-phase tick loop.
pub mod simulator;

/// o32 Linux syscall emulation.
pub mod syscall;

pub use simulator::{RunOutcome, Simulator};
pub use syscall::EmulatedSyscalls;
