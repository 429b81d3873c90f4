//! MIPS32 Primary Opcodes.
//!
//! Values of bits 31-26.

/// Register-register ALU, shifts, multiply/divide, register jumps, traps.
pub const OP_SPECIAL: u32 = 0x00;
/// `bltz`/`bgez`/`bltzal`/`bgezal`, selected by `rt`.
pub const OP_REGIMM: u32 = 0x01;
/// Jump.
pub const OP_J: u32 = 0x02;
/// Jump and link.
pub const OP_JAL: u32 = 0x03;
/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch on not equal.
pub const OP_BNE: u32 = 0x05;
/// Branch on less than or equal to zero.
pub const OP_BLEZ: u32 = 0x06;
/// Branch on greater than zero.
pub const OP_BGTZ: u32 = 0x07;
/// Add immediate.
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned (no trap; same result as `addi` here).
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate.
pub const OP_SLTI: u32 = 0x0a;
/// Set on less than immediate unsigned.
pub const OP_SLTIU: u32 = 0x0b;
/// And immediate.
pub const OP_ANDI: u32 = 0x0c;
/// Or immediate.
pub const OP_ORI: u32 = 0x0d;
/// Xor immediate.
pub const OP_XORI: u32 = 0x0e;
/// Load upper immediate.
pub const OP_LUI: u32 = 0x0f;
/// Coprocessor 1.
pub const OP_COP1: u32 = 0x11;
/// Load byte.
pub const OP_LB: u32 = 0x20;
/// Load half-word.
pub const OP_LH: u32 = 0x21;
/// Load word left.
pub const OP_LWL: u32 = 0x22;
/// Load word.
pub const OP_LW: u32 = 0x23;
/// Load byte unsigned.
pub const OP_LBU: u32 = 0x24;
/// Load half-word unsigned.
pub const OP_LHU: u32 = 0x25;
/// Load word right.
pub const OP_LWR: u32 = 0x26;
/// Store byte.
pub const OP_SB: u32 = 0x28;
/// Store half-word.
pub const OP_SH: u32 = 0x29;
/// Store word left.
pub const OP_SWL: u32 = 0x2a;
/// Store word.
pub const OP_SW: u32 = 0x2b;
/// Store word right.
pub const OP_SWR: u32 = 0x2e;
/// Load word to coprocessor 1.
pub const OP_LWC1: u32 = 0x31;
/// Store word from coprocessor 1.
pub const OP_SWC1: u32 = 0x39;
