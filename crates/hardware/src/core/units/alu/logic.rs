//! Bitwise logic and comparison operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or set-on-less-than operation; other opcodes return `0`.
///
/// `Lui` ignores `a` and returns `b << 16`.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        AluOp::Lui => b << 16,
        _ => 0,
    }
}
