//! Global Simulator Constants.
//!
//! This module defines constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction width and the canonical no-op encoding.
//! 2. **Register Constants:** Register count and index mask.
//! 3. **Memory Constants:** Alignment mask for the 8-byte backing words.
//! 4. **Arithmetic Constants:** Divide-by-zero saturation value.

/// Size of every MIPS instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Canonical no-op encoding (`sll $0, $0, 0`).
pub const NOP_INSTRUCTION: u32 = 0;

/// Number of general-purpose and single-precision float registers.
pub const NUM_REGS: usize = 32;

/// Mask applied to 5-bit register and shift-amount fields.
pub const REG_MASK: u32 = 0x1F;

/// Mask that aligns a byte address to its enclosing 8-byte backing word.
pub const WORD64_ALIGN_MASK: u32 = !0x7;

/// Value written to both Hi and Lo when a divide has a zero divisor.
pub const DIV_BY_ZERO_RESULT: u32 = 0x7fff_ffff;

/// Mask for the region bits of a jump target taken from `pc + 4`.
pub const JUMP_REGION_MASK: u32 = 0xf000_0000;
