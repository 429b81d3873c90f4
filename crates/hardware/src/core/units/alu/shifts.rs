//! Shift operations.
//!
//! The shift amount is always masked to 5 bits, which covers both the `shamt`
//! field and the low bits of `rs` for the variable forms.

use crate::common::constants::REG_MASK;
use crate::core::pipeline::signals::AluOp;

/// Shifts `value` by `amount & 0x1f`; non-shift opcodes return `value`.
pub const fn execute(op: AluOp, value: u32, amount: u32) -> u32 {
    let amount = amount & REG_MASK;
    match op {
        AluOp::Sll => value << amount,
        AluOp::Srl => value >> amount,
        AluOp::Sra => ((value as i32) >> amount) as u32,
        _ => value,
    }
}
