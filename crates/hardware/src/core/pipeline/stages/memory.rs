//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It performs the following:
//! 1. **Loads:** Reads the enclosing 8-byte word and extracts the sub-word, or merges
//!    it with the old register value for `lwl`/`lwr`.
//! 2. **Stores:** Read-modify-writes the enclosing word with data from the bypass copy
//!    (or the float file for `swc1`).
//! 3. **Deferred Load Commit:** In the falling step, publishes an integer load result
//!    to the bypass copy unless Execute wrote the same register this cycle, in which
//!    case the younger value stands.

use tracing::trace;

use crate::common::Result;
use crate::core::Cpu;
use crate::core::pipeline::signals::MemOp;
use crate::core::pipeline::traits::PipelineStage;
use crate::core::units::lsu::Lsu;

/// Memory stage. Holds no state between cycles.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStage;

impl PipelineStage for MemoryStage {
    fn rising(&mut self, cpu: &mut Cpu) -> Result<()> {
        cpu.mem.clone_from(&cpu.ex_mem);

        let rec = &mut cpu.mem;
        let Some(op) = rec.mem_op.filter(|_| rec.valid) else {
            return Ok(());
        };

        if op.is_load() {
            rec.result_lo = Lsu::load(cpu.memory.as_ref(), op, rec.mem_addr, rec.subreg_operand);
            cpu.stats.loads += 1;
        } else {
            let value = match op {
                MemOp::Swc1 => rec.fsrc_reg.map_or(0, |f| cpu.regs.fpr.read(f)),
                _ => rec.data_reg.map_or(0, |r| cpu.regs.bypass.read(r)),
            };
            Lsu::store(cpu.memory.as_mut(), op, rec.mem_addr, value);
            cpu.stats.stores += 1;
        }

        if cpu.trace {
            trace!(
                target: "mipsim::pipeline",
                "MEM {:#010x} {:?} addr={:#010x} value={:#010x}",
                rec.pc,
                op,
                rec.mem_addr,
                rec.result_lo
            );
        }
        Ok(())
    }

    fn falling(&mut self, cpu: &mut Cpu) -> Result<()> {
        let rec = &cpu.mem;
        if rec.load_delay && rec.write_reg && !cpu.regs.flags.is_set(rec.dst) {
            cpu.regs.bypass.write(rec.dst, rec.result_lo);
        }
        cpu.regs.bypass.zero_r0();
        cpu.mem_wb.clone_from(&cpu.mem);
        Ok(())
    }
}
