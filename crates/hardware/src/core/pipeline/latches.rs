//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines what flows between the stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Fetch entry:** The raw instruction word and its address (IF/ID).
//! 2. **Control record:** Every decoded field later stages need (ID/EX, EX/MEM, MEM/WB),
//!    plus the results each stage fills in along the way.
//! 3. **Bubbles:** An invalid record that every stage passes through without effect.

use crate::core::pipeline::signals::{MemOp, Op};
use crate::core::pipeline::traits::PipelineLatch;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// `false` for a bubble.
    pub valid: bool,
}

impl IfIdEntry {
    /// A fetched instruction.
    pub const fn new(pc: u32, inst: u32) -> Self {
        Self {
            pc,
            inst,
            valid: true,
        }
    }
}

impl PipelineLatch for IfIdEntry {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_empty(&self) -> bool {
        !self.valid
    }
}

/// Per-instruction bundle carried through ID/EX, EX/MEM and MEM/WB.
///
/// Decode fills the operand, selector and write-enable fields. Execute fills
/// `result_lo`, `result_hi`, `btaken`, `btgt` and `mem_addr`; Memory overwrites
/// `result_lo` with the loaded value. No stage re-inspects `inst`.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ControlRecord {
    /// Address of the instruction.
    pub pc: u32,
    /// Raw encoding, kept for tracing and the fatal dump.
    pub inst: u32,
    /// `false` for a bubble.
    pub valid: bool,

    /// First operand value.
    pub src1: u32,
    /// Second operand value (register value or extended immediate).
    pub src2: u32,
    /// Register Execute re-reads `src1` from, if any.
    pub src1_reg: Option<usize>,
    /// Register Execute re-reads `src2` from, if any.
    pub src2_reg: Option<usize>,
    /// Integer register supplying store data or the `lwl`/`lwr` merge operand.
    pub data_reg: Option<usize>,
    /// Float register read by `swc1` or `mfc1`.
    pub fsrc_reg: Option<usize>,
    /// Destination register index (integer or float, per the write-enables).
    pub dst: usize,
    /// Immediate shift amount.
    pub shift_amt: u32,
    /// Old destination value merged by `lwl`/`lwr`.
    pub subreg_operand: u32,

    /// Operation Execute performs.
    pub op: Op,
    /// Memory operation, if the record touches memory.
    pub mem_op: Option<MemOp>,

    /// Branch or jump target.
    pub btgt: u32,
    /// Branch outcome, set in Execute.
    pub btaken: bool,
    /// Set on branches and jumps: the next instruction is a delay slot.
    pub bdslot: bool,

    /// Writes `dst` in the integer file.
    pub write_reg: bool,
    /// Writes `dst` in the float file.
    pub write_freg: bool,
    /// Writes Hi.
    pub hi_wport: bool,
    /// Writes Lo.
    pub lo_wport: bool,
    /// Integer load whose value reaches the bypass copy in Memory, not Execute.
    pub load_delay: bool,
    /// `syscall`; serviced in Writeback.
    pub is_syscall: bool,
    /// Unrecognized encoding; fatal in Writeback.
    pub is_illegal: bool,

    /// Low (or only) result.
    pub result_lo: u32,
    /// High result of multiply/divide.
    pub result_hi: u32,
    /// Effective address of a load or store.
    pub mem_addr: u32,
}

impl ControlRecord {
    /// A bubble: carries no operation and enables no write.
    pub fn bubble() -> Self {
        Self::default()
    }

    /// A fresh record for a fetched instruction, before Decode fills it in.
    pub fn from_fetch(entry: &IfIdEntry) -> Self {
        Self {
            pc: entry.pc,
            inst: entry.inst,
            valid: entry.valid,
            ..Self::default()
        }
    }

    /// Returns `true` if the record names a memory operation.
    pub const fn mem_control(&self) -> bool {
        self.mem_op.is_some()
    }

    /// Returns `true` for any store form.
    pub fn is_store(&self) -> bool {
        self.mem_op.is_some_and(MemOp::is_store)
    }

    /// Integer registers this record reads, for hazard checks.
    pub fn int_sources(&self) -> impl Iterator<Item = usize> {
        [self.src1_reg, self.src2_reg, self.data_reg]
            .into_iter()
            .flatten()
    }

    /// Disables every architectural write; used for illegal encodings.
    pub const fn disable_writes(&mut self) {
        self.write_reg = false;
        self.write_freg = false;
        self.hi_wport = false;
        self.lo_wport = false;
    }
}

impl PipelineLatch for ControlRecord {
    fn flush(&mut self) {
        *self = Self::bubble();
    }

    fn is_empty(&self) -> bool {
        !self.valid
    }
}
