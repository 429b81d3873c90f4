//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Refresh:** Re-reads register operands from the bypass copy, which
//!    already holds the result of the instruction directly ahead.
//! 2. **Arithmetic Execution:** Dispatches the record's `Op` to the ALU, shifter and
//!    multiply/divide unit.
//! 3. **Branch Resolution:** Decides taken/not-taken and redirects the PC; the delay
//!    slot behind the branch is already in flight and still executes.
//! 4. **Early Commit:** In the falling step, writes non-memory integer results into the
//!    bypass copy and marks them in the write-flag vector.

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::{RegisterFile, Result};
use crate::core::Cpu;
use crate::core::pipeline::latches::ControlRecord;
use crate::core::pipeline::signals::{MemOp, Op, ShiftAmount};
use crate::core::pipeline::traits::PipelineStage;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::stats::SimStats;

/// Distance from a linking instruction to its return address (past the delay slot).
const LINK_OFFSET: u32 = 2 * INSTRUCTION_SIZE;

/// Execute stage. Holds no state between cycles.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecuteStage;

impl PipelineStage for ExecuteStage {
    fn rising(&mut self, cpu: &mut Cpu) -> Result<()> {
        cpu.ex.clone_from(&cpu.id_ex);
        cpu.regs.flags.clear();

        let rec = &mut cpu.ex;
        rec.btaken = false;
        if !rec.valid || rec.is_syscall || rec.is_illegal {
            return Ok(());
        }

        execute(rec, &cpu.regs);
        if rec.btaken {
            cpu.pc = rec.btgt;
        }
        count(&mut cpu.stats, rec);

        if cpu.trace {
            trace!(
                target: "mipsim::pipeline",
                "EX  {:#010x} lo={:#010x} hi={:#010x} taken={}",
                rec.pc,
                rec.result_lo,
                rec.result_hi,
                rec.btaken
            );
        }
        Ok(())
    }

    fn falling(&mut self, cpu: &mut Cpu) -> Result<()> {
        let rec = &cpu.ex;
        if rec.write_reg && !rec.mem_control() {
            cpu.regs.bypass.write(rec.dst, rec.result_lo);
            cpu.regs.flags.set(rec.dst);
        }
        cpu.regs.bypass.zero_r0();
        cpu.ex_mem.clone_from(&cpu.ex);
        Ok(())
    }
}

/// Runs the record's operation against the current bypass values.
///
/// Fills `result_lo`, `result_hi`, `btaken`, `btgt` and `mem_addr` as the
/// operation requires. Link forms always write their return address, taken or not.
pub fn execute(rec: &mut ControlRecord, regs: &RegisterFile) {
    if let Some(r) = rec.src1_reg {
        rec.src1 = regs.bypass.read(r);
    }
    if let Some(r) = rec.src2_reg {
        rec.src2 = regs.bypass.read(r);
    }
    let merges = rec.mem_op.is_some_and(MemOp::merges_subreg);
    if let Some(r) = rec.data_reg.filter(|_| merges) {
        rec.subreg_operand = regs.bypass.read(r);
    }

    let (a, b) = (rec.src1, rec.src2);
    match rec.op {
        Op::Nop | Op::Syscall | Op::Break => {}
        Op::Alu(op) => rec.result_lo = Alu::execute(op, a, b),
        Op::Shift(op, amount) => {
            let shamt = match amount {
                ShiftAmount::Immediate => rec.shift_amt,
                ShiftAmount::Variable => a,
            };
            rec.result_lo = Alu::execute(op, b, shamt);
        }
        Op::MulDiv(op) => (rec.result_hi, rec.result_lo) = Alu::mul_div(op, a, b),
        Op::MoveFromHi => rec.result_lo = regs.hi,
        Op::MoveFromLo => rec.result_lo = regs.lo,
        Op::MoveToHi => rec.result_hi = a,
        Op::MoveToLo | Op::MoveToCop1 => rec.result_lo = a,
        Op::MoveFromCop1 => rec.result_lo = rec.fsrc_reg.map_or(0, |f| regs.fpr.read(f)),
        Op::Branch { cond, .. } => rec.btaken = Bru::taken(cond, a, b),
        Op::Jump { .. } => rec.btaken = true,
        Op::JumpReg { .. } => {
            rec.btgt = a;
            rec.btaken = true;
        }
        Op::MemAddr => rec.mem_addr = a.wrapping_add(b),
    }

    if rec.op.is_link() {
        rec.result_lo = rec.pc.wrapping_add(LINK_OFFSET);
    }
}

fn count(stats: &mut SimStats, rec: &ControlRecord) {
    match rec.op {
        Op::Branch { .. } => {
            stats.cond_branches += 1;
            if rec.btaken {
                stats.taken_branches += 1;
            }
        }
        Op::Jump { link: true } => stats.jal += 1,
        Op::JumpReg { .. } => stats.jr += 1,
        Op::MoveFromCop1 | Op::MoveToCop1 => stats.fp_moves += 1,
        _ => {}
    }
}
