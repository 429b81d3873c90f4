//! MIPS32 encoding tables.

/// Coprocessor-1 move formats.
pub mod cop1;

/// SPECIAL (opcode 0) function codes.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;

/// REGIMM (opcode 1) branch selectors.
pub mod regimm;
