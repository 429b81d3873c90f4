//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the current PC into the IF/ID latch and advances the PC by
//! one instruction. Fetch only acts in the falling step, after Execute may have
//! redirected the PC and Writeback may have rolled it back, and it obeys the
//! three stall counters:
//!
//! - `decoder_stall` or `syscall_stall` nonzero: hold, IF/ID and PC unchanged.
//! - `branch_stall` set: one bubble, PC unchanged.
//! - instruction budget spent: bubbles until the pipeline drains.

use tracing::trace;

use crate::common::Result;
use crate::common::constants::{INSTRUCTION_SIZE, WORD64_ALIGN_MASK};
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::core::pipeline::traits::{PipelineLatch, PipelineStage};
use crate::isa::disasm::disassemble;
use crate::soc::memory::get_word;

/// Fetch stage with an optional instruction budget.
#[derive(Clone, Debug, Default)]
pub struct FetchStage {
    limit: Option<u64>,
}

impl FetchStage {
    /// Creates a fetch stage that supplies at most `limit` instructions.
    pub const fn new(limit: Option<u64>) -> Self {
        Self { limit }
    }

    /// Returns `true` once the budget is spent.
    ///
    /// Measured against `stats.fetched`, which Writeback decrements when a
    /// syscall squashes an already-fetched instruction.
    pub fn exhausted(&self, cpu: &Cpu) -> bool {
        self.limit.is_some_and(|limit| cpu.stats.fetched >= limit)
    }
}

impl PipelineStage for FetchStage {
    fn rising(&mut self, _cpu: &mut Cpu) -> Result<()> {
        Ok(())
    }

    fn falling(&mut self, cpu: &mut Cpu) -> Result<()> {
        let hz = cpu.hazards;
        if hz.decoder_stall != 0 || hz.syscall_stall != 0 {
            if cpu.trace {
                trace!(target: "mipsim::pipeline", "IF  {:#010x} hold", cpu.pc);
            }
            return Ok(());
        }

        if hz.branch_stall != 0 || self.exhausted(cpu) {
            cpu.if_id.flush();
            return Ok(());
        }

        let pc = cpu.pc;
        let inst = get_word(pc, cpu.memory.read(pc & WORD64_ALIGN_MASK));
        cpu.if_id = IfIdEntry::new(pc, inst);
        cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE);
        cpu.stats.fetched += 1;

        if cpu.trace {
            trace!(target: "mipsim::pipeline", "IF  {pc:#010x} {}", disassemble(inst));
        }
        Ok(())
    }
}
