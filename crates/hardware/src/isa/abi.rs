//! MIPS o32 Application Binary Interface (ABI) register constants.
//!
//! Register indices used by the syscall layer, the loader and link instructions.

/// `$zero`, hard-wired to zero.
pub const REG_ZERO: usize = 0;
/// `$v0`, syscall number on entry and first return value.
pub const REG_V0: usize = 2;
/// `$v1`, second return value.
pub const REG_V1: usize = 3;
/// `$a0`, first argument.
pub const REG_A0: usize = 4;
/// `$a1`, second argument.
pub const REG_A1: usize = 5;
/// `$a2`, third argument.
pub const REG_A2: usize = 6;
/// `$a3`, fourth argument; syscall error flag on return.
pub const REG_A3: usize = 7;
/// `$gp`, global pointer.
pub const REG_GP: usize = 28;
/// `$sp`, stack pointer.
pub const REG_SP: usize = 29;
/// `$ra`, link register written by `jal`, `bltzal` and `bgezal`.
pub const REG_RA: usize = 31;

/// ABI names for `$0`-`$31`.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];
