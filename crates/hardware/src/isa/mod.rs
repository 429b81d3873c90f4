//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcode and function-code tables, field extraction, register
//! names, and a disassembler for the MIPS32 subset the pipeline implements.
//!
//! # Encoding groups
//!
//! * `mips32::opcodes`: primary opcode field (bits 31-26).
//! * `mips32::funct`: SPECIAL function codes (bits 5-0 when the opcode is 0).
//! * `mips32::regimm`: REGIMM branch selectors (the `rt` field when the opcode is 1).
//! * `mips32::cop1`: coprocessor-1 move formats (the `rs`/`fmt` field).

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// MIPS32 encoding tables.
pub mod mips32;
