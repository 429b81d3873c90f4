//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the whole
//! processor state every stage reads and writes. It coordinates the following:
//! 1. **State Management:** Register files, program counter and exit request.
//! 2. **Pipeline Control:** The four inter-stage latches, the per-stage working
//!    records and the three stall counters.
//! 3. **Memory:** The backing store collaborator.
//! 4. **Observability:** Statistics and the fatal register dump.

/// Cycle bookkeeping and state dumps.
pub mod execution;

/// Syscall trap interface.
pub mod trap;

use crate::common::RegisterFile;
use crate::config::{Config, PipelineConfig};
use crate::core::pipeline::latches::{ControlRecord, IfIdEntry};
use crate::isa::abi;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Stall counters shared by Fetch, Decode and Writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardCounters {
    /// Remaining cycles Decode holds the current instruction; Fetch holds while nonzero.
    pub decoder_stall: u32,
    /// Set for the cycle after a branch or jump is decoded; Fetch issues one bubble.
    pub branch_stall: u32,
    /// Set from Decode of a `syscall` until Writeback services it.
    pub syscall_stall: u32,
}

/// Main CPU structure containing all processor state.
///
/// Stages receive `&mut Cpu` in turn; the simulator owns the stages themselves.
pub struct Cpu {
    /// General, bypass, float and Hi/Lo registers plus write flags.
    pub regs: RegisterFile,
    /// Program Counter (next fetch address).
    pub pc: u32,
    /// Backing store.
    pub memory: Box<dyn Memory>,

    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EX latch.
    pub id_ex: ControlRecord,
    /// EX/MEM latch.
    pub ex_mem: ControlRecord,
    /// MEM/WB latch.
    pub mem_wb: ControlRecord,

    /// Record most recently decoded.
    pub id: ControlRecord,
    /// Record in Execute this cycle.
    pub ex: ControlRecord,
    /// Record in Memory this cycle.
    pub mem: ControlRecord,
    /// Record in Writeback this cycle.
    pub wb: ControlRecord,

    /// Stall counters.
    pub hazards: HazardCounters,
    /// Decode stall lengths.
    pub policy: PipelineConfig,

    /// Emit per-stage trace events.
    pub trace: bool,
    /// Exit code once the program has requested exit.
    pub exit_code: Option<u32>,
    /// Performance statistics.
    pub stats: SimStats,
}

impl std::fmt::Debug for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("hazards", &self.hazards)
            .field("exit_code", &self.exit_code)
            .finish_non_exhaustive()
    }
}

impl Cpu {
    /// Creates a CPU with an empty pipeline.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the initial `$sp`, optional entry override, trace flag
    ///   and stall lengths.
    /// * `memory` - Backing store, usually already holding the program image.
    ///
    /// # Returns
    ///
    /// A CPU whose PC is `config.general.start_pc` (or 0) and whose latches hold bubbles.
    pub fn new(config: &Config, memory: Box<dyn Memory>) -> Self {
        let mut regs = RegisterFile::new();
        regs.write(abi::REG_SP, config.general.stack_pointer);

        Self {
            regs,
            pc: config.general.start_pc.unwrap_or_default(),
            memory,
            if_id: IfIdEntry::default(),
            id_ex: ControlRecord::bubble(),
            ex_mem: ControlRecord::bubble(),
            mem_wb: ControlRecord::bubble(),
            id: ControlRecord::bubble(),
            ex: ControlRecord::bubble(),
            mem: ControlRecord::bubble(),
            wb: ControlRecord::bubble(),
            hazards: HazardCounters::default(),
            policy: config.pipeline,
            trace: config.general.trace,
            exit_code: None,
            stats: SimStats::default(),
        }
    }

    /// Retrieves the exit code if the program has requested exit.
    pub fn take_exit(&mut self) -> Option<u32> {
        self.exit_code.take()
    }
}
