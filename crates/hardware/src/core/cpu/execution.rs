//! Cycle Bookkeeping and State Dumps.
//!
//! This module holds the parts of the execution loop that live on the CPU itself:
//! 1. **Drain Detection:** Whether any instruction is still in flight.
//! 2. **Fatal Dump:** PC, registers, Hi/Lo and the Writeback record's control-flow
//!    fields, printed by the driver when the simulation halts abnormally.

use std::fmt::Write;

use super::Cpu;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Returns `true` when no latch holds an instruction and no stall is pending.
    pub fn pipeline_is_empty(&self) -> bool {
        self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
            && self.hazards.decoder_stall == 0
            && self.hazards.syscall_stall == 0
    }

    /// Formats the fatal register dump.
    ///
    /// Lists the PC, all 32 general registers in hex and decimal, Hi and Lo, and
    /// the taken/delay-slot/target fields of the record in Writeback with its
    /// disassembly.
    pub fn dump_state(&self) -> String {
        let mut out = String::new();
        let wb = &self.wb;
        let _ = writeln!(out, "PC = {:#010x}", self.pc);
        out.push_str(&self.regs.gpr.dump());
        let _ = writeln!(
            out,
            " hi        {:08x} ({})\n lo        {:08x} ({})",
            self.regs.hi,
            self.regs.hi as i32,
            self.regs.lo,
            self.regs.lo as i32
        );
        let _ = writeln!(
            out,
            "WB  {:#010x} {:<24} taken={} bd={} target={:#010x}",
            wb.pc,
            disassemble(wb.inst),
            wb.btaken,
            wb.bdslot,
            wb.btgt
        );
        out
    }
}
