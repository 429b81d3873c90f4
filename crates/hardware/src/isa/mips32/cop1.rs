//! MIPS32 Coprocessor-1 Move Formats.
//!
//! Values of the `fmt` field when the primary opcode is `OP_COP1`.

/// Move word from float register to GPR.
pub const FMT_MFC1: u32 = 0x00;
/// Move word from GPR to float register.
pub const FMT_MTC1: u32 = 0x04;
