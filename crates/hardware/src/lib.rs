//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-level, in-order five-stage MIPS32 pipeline with the following:
//! 1. **Core:** Fetch, Decode, Execute, Memory and Writeback under two-phase (rising/falling)
//!    clocking, with a bypass register copy, load-use and Hi/Lo stalls, and branch delay slots.
//! 2. **Memory:** A flat store of aligned 8-byte words with big-endian sub-word helpers.
//! 3. **ISA:** Field extraction, opcode tables and a disassembler for MIPS32 integer and COP1 moves.
//! 4. **Simulation:** Loader (ELF32 or raw), syscall emulation, configuration and statistics.

/// Common types and constants (errors, register file, masks).
pub mod common;
/// Simulator configuration (defaults and JSON-backed structures).
pub mod config;
/// CPU core (pipeline, arch, units, trap interface).
pub mod core;
/// Instruction set (fields, opcode tables, ABI, disassembly).
pub mod isa;
/// Driver loop, loader and syscall emulation.
pub mod sim;
/// Backing memory and its trait.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// CPU state handed to every stage.
pub use crate::core::Cpu;
/// Top-level simulator; owns the CPU and the stages.
pub use crate::sim::Simulator;
