//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional-branch predicates and computes the three target formulas:
//! PC-relative branches, region-absolute jumps, and register jumps (which simply use
//! the register value). There is no prediction; Execute resolves every branch and
//! the delay slot covers the redirect.

use crate::common::constants::{INSTRUCTION_SIZE, JUMP_REGION_MASK};
use crate::core::pipeline::signals::BranchCond;

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch predicate on register operands.
    ///
    /// # Arguments
    ///
    /// * `cond` - Predicate selected by Decode.
    /// * `rs`   - Value of the first operand.
    /// * `rt`   - Value of the second operand (only used by `Eq`/`Ne`).
    pub const fn taken(cond: BranchCond, rs: u32, rt: u32) -> bool {
        let s = rs as i32;
        match cond {
            BranchCond::Eq => rs == rt,
            BranchCond::Ne => rs != rt,
            BranchCond::Lez => s <= 0,
            BranchCond::Gtz => s > 0,
            BranchCond::Ltz => s < 0,
            BranchCond::Gez => s >= 0,
        }
    }

    /// Target of a PC-relative branch: `pc + 4 + (sext(imm16) << 2)`.
    ///
    /// # Arguments
    ///
    /// * `pc`   - Address of the branch instruction.
    /// * `simm` - The immediate, already sign-extended to 32 bits.
    pub const fn branch_target(pc: u32, simm: u32) -> u32 {
        pc.wrapping_add(simm << 2).wrapping_add(INSTRUCTION_SIZE)
    }

    /// Target of `j`/`jal`: the 256 MiB region of `pc + 4` with `target26 << 2`.
    pub const fn jump_target(pc: u32, target: u32) -> u32 {
        (pc.wrapping_add(INSTRUCTION_SIZE) & JUMP_REGION_MASK) | (target << 2)
    }
}
