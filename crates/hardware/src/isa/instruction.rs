//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the three overlapping MIPS formats:
//! R-format (opcode, rs, rt, rd, shamt, funct), I-format (opcode, rs, rt, imm16)
//! and J-format (opcode, target26).

/// Shift of the primary opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Shift of the `rs` field (bits 25-21), also the COP1 `fmt` field.
pub const RS_SHIFT: u32 = 21;
/// Shift of the `rt` field (bits 20-16).
pub const RT_SHIFT: u32 = 16;
/// Shift of the `rd` field (bits 15-11), also the COP1 `fs` field.
pub const RD_SHIFT: u32 = 11;
/// Shift of the shift-amount field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;

/// Mask for the 6-bit opcode and function fields.
pub const OPCODE_MASK: u32 = 0x3F;
/// Mask for 5-bit register fields.
pub const REG_FIELD_MASK: u32 = 0x1F;
/// Mask for the 16-bit immediate.
pub const IMM_MASK: u32 = 0xFFFF;
/// Mask for the 26-bit jump target.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Primary opcode (bits 31-26).
    fn opcode(&self) -> u32;

    /// First source register (bits 25-21).
    fn rs(&self) -> usize;

    /// Second source register, or the destination of I-format ops (bits 20-16).
    fn rt(&self) -> usize;

    /// R-format destination register (bits 15-11).
    fn rd(&self) -> usize;

    /// Shift amount (bits 10-6).
    fn shamt(&self) -> u32;

    /// R-format function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Raw 16-bit immediate, zero-extended.
    fn imm(&self) -> u32;

    /// 16-bit immediate, sign-extended to 32 bits.
    fn simm(&self) -> u32;

    /// 26-bit jump target.
    fn target(&self) -> u32;

    /// COP1 format field; shares bits 25-21 with `rs`.
    fn fmt(&self) -> u32;

    /// COP1 `fs` register; shares bits 15-11 with `rd`.
    fn fs(&self) -> usize;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn simm(&self) -> u32 {
        i32::from(*self as u16 as i16) as u32
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }

    #[inline(always)]
    fn fmt(&self) -> u32 {
        (self >> RS_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn fs(&self) -> usize {
        self.rd()
    }
}
