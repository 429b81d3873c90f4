//! MIPS32 SPECIAL Function Codes.
//!
//! Values of bits 5-0 when the primary opcode is `OP_SPECIAL`.

/// Shift left logical by `shamt`.
pub const SLL: u32 = 0x00;
/// Shift right logical by `shamt`.
pub const SRL: u32 = 0x02;
/// Shift right arithmetic by `shamt`.
pub const SRA: u32 = 0x03;
/// Shift left logical by `rs`.
pub const SLLV: u32 = 0x04;
/// Shift right logical by `rs`.
pub const SRLV: u32 = 0x06;
/// Shift right arithmetic by `rs`.
pub const SRAV: u32 = 0x07;
/// Jump register.
pub const JR: u32 = 0x08;
/// Jump and link register.
pub const JALR: u32 = 0x09;
/// System call trap.
pub const SYSCALL: u32 = 0x0c;
/// Breakpoint.
pub const BREAK: u32 = 0x0d;
/// Move from Hi.
pub const MFHI: u32 = 0x10;
/// Move to Hi.
pub const MTHI: u32 = 0x11;
/// Move from Lo.
pub const MFLO: u32 = 0x12;
/// Move to Lo.
pub const MTLO: u32 = 0x13;
/// Signed multiply.
pub const MULT: u32 = 0x18;
/// Unsigned multiply.
pub const MULTU: u32 = 0x19;
/// Signed divide.
pub const DIV: u32 = 0x1a;
/// Unsigned divide.
pub const DIVU: u32 = 0x1b;
/// Add.
pub const ADD: u32 = 0x20;
/// Add unsigned.
pub const ADDU: u32 = 0x21;
/// Subtract.
pub const SUB: u32 = 0x22;
/// Subtract unsigned.
pub const SUBU: u32 = 0x23;
/// Bitwise and.
pub const AND: u32 = 0x24;
/// Bitwise or.
pub const OR: u32 = 0x25;
/// Bitwise xor.
pub const XOR: u32 = 0x26;
/// Bitwise nor.
pub const NOR: u32 = 0x27;
/// Set on less than.
pub const SLT: u32 = 0x2a;
/// Set on less than unsigned.
pub const SLTU: u32 = 0x2b;
