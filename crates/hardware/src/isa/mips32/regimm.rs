//! MIPS32 REGIMM Branch Selectors.
//!
//! Values of the `rt` field when the primary opcode is `OP_REGIMM`.

/// Branch on less than zero.
pub const BLTZ: usize = 0x00;
/// Branch on greater than or equal to zero.
pub const BGEZ: usize = 0x01;
/// Branch on less than zero and link.
pub const BLTZAL: usize = 0x10;
/// Branch on greater than or equal to zero and link.
pub const BGEZAL: usize = 0x11;
