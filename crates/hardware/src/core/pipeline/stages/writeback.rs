//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the pipeline. It performs the following:
//! 1. **Register Commit:** Writes exactly one destination class, in priority order:
//!    integer register, float register, then Hi and/or Lo.
//! 2. **Syscall Service:** Hands the architectural state to the syscall handler, then
//!    replays the instruction the trap squashed and re-synchronizes the bypass copy.
//! 3. **Illegal Halt:** Stops the simulation with the offending word and PC.
//!
//! All work happens in the rising step, so the committed file is up to date before
//! any falling-step read in the same cycle.

use tracing::{debug, error, trace};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::{Result, SimError};
use crate::core::Cpu;
use crate::core::cpu::trap::SyscallHandler;
use crate::core::pipeline::traits::PipelineStage;
use crate::isa::abi;

/// Writeback stage; owns the syscall collaborator.
pub struct WritebackStage {
    handler: Box<dyn SyscallHandler>,
}

impl std::fmt::Debug for WritebackStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WritebackStage").finish_non_exhaustive()
    }
}

impl WritebackStage {
    /// Creates a writeback stage that services traps with `handler`.
    pub fn new(handler: Box<dyn SyscallHandler>) -> Self {
        Self { handler }
    }

    fn service_syscall(&mut self, cpu: &mut Cpu) -> Result<()> {
        let inst = cpu.wb.inst;
        cpu.stats.syscalls += 1;
        debug!(
            target: "mipsim::pipeline",
            "WB  {:#010x} syscall v0={}",
            cpu.wb.pc,
            cpu.regs.read(abi::REG_V0)
        );

        self.handler.handle(cpu, inst)?;

        // The instruction fetched behind the trap was squashed in Decode; fetch it again.
        if cpu.if_id.valid {
            cpu.pc = cpu.pc.wrapping_sub(INSTRUCTION_SIZE);
            cpu.stats.fetched = cpu.stats.fetched.saturating_sub(1);
        }
        cpu.hazards.syscall_stall = 0;
        cpu.regs.flags.clear();
        cpu.regs.refresh_bypass();
        Ok(())
    }

    fn commit(cpu: &mut Cpu) {
        let rec = &cpu.wb;
        if rec.write_reg {
            cpu.regs.gpr.write(rec.dst, rec.result_lo);
        } else if rec.write_freg {
            cpu.regs.fpr.write(rec.dst, rec.result_lo);
        } else {
            if rec.hi_wport {
                cpu.regs.hi = rec.result_hi;
            }
            if rec.lo_wport {
                cpu.regs.lo = rec.result_lo;
            }
        }
    }
}

impl PipelineStage for WritebackStage {
    fn rising(&mut self, cpu: &mut Cpu) -> Result<()> {
        cpu.wb.clone_from(&cpu.mem_wb);

        if cpu.wb.valid {
            if cpu.wb.is_syscall {
                self.service_syscall(cpu)?;
            } else if cpu.wb.is_illegal {
                let (inst, pc) = (cpu.wb.inst, cpu.wb.pc);
                error!(target: "mipsim::pipeline", "illegal instruction {inst:#010x} at {pc:#010x}");
                return Err(SimError::IllegalInstruction { inst, pc });
            } else {
                Self::commit(cpu);
            }
            cpu.stats.retired += 1;

            if cpu.trace {
                trace!(
                    target: "mipsim::pipeline",
                    "WB  {:#010x} dst={} value={:#010x}",
                    cpu.wb.pc,
                    cpu.wb.dst,
                    cpu.wb.result_lo
                );
            }
        }

        cpu.regs.zero_r0();
        Ok(())
    }

    fn falling(&mut self, _cpu: &mut Cpu) -> Result<()> {
        Ok(())
    }
}
