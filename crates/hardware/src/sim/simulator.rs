//! Simulator: owns the CPU and the five stages side by side.
//!
//! Each tick runs the rising step of Fetch, Decode, Execute, Memory and Writeback
//! in that order, then the falling step of each in the same order. Stages only
//! communicate through the `Cpu` they are handed, so this ordering is the whole
//! timing model.

use tracing::info;

use crate::common::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::trap::SyscallHandler;
use crate::core::pipeline::stages::{
    DecodeStage, ExecuteStage, FetchStage, MemoryStage, WritebackStage,
};
use crate::core::pipeline::traits::PipelineStage;
use crate::sim::loader::{self, ImageFormat};
use crate::soc::{FlatMemory, Memory};

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program requested exit with this code.
    Exited(u32),
    /// The instruction budget ran out and the pipeline drained.
    BudgetDrained,
}

/// Top-level simulator: CPU state plus the pipeline stages.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, latches, memory, stats).
    pub cpu: Cpu,
    fetch: FetchStage,
    decode: DecodeStage,
    execute: ExecuteStage,
    memory: MemoryStage,
    writeback: WritebackStage,
}

impl Simulator {
    /// Creates a simulator.
    ///
    /// # Arguments
    ///
    /// * `config`  - Simulator configuration.
    /// * `memory`  - Backing store holding the program.
    /// * `handler` - Syscall collaborator used by Writeback.
    pub fn new(config: &Config, memory: Box<dyn Memory>, handler: Box<dyn SyscallHandler>) -> Self {
        Self {
            cpu: Cpu::new(config, memory),
            fetch: FetchStage::new(config.general.max_instructions),
            decode: DecodeStage::new(),
            execute: ExecuteStage,
            memory: MemoryStage,
            writeback: WritebackStage::new(handler),
        }
    }

    /// Creates a simulator over a fresh [`FlatMemory`] holding `image`.
    ///
    /// The PC starts at the image's entry point unless `config.general.start_pc`
    /// overrides it.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Load` if the image cannot be placed.
    pub fn with_image(
        config: &Config,
        image: &[u8],
        format: ImageFormat,
        handler: Box<dyn SyscallHandler>,
    ) -> Result<Self> {
        let mut memory = FlatMemory::new();
        let entry = loader::load_image(image, format, &mut memory)?;
        let mut sim = Self::new(config, Box::new(memory), handler);
        sim.cpu.pc = config.general.start_pc.unwrap_or(entry);
        Ok(sim)
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns `SimError::IllegalInstruction` when an unrecognized encoding reaches
    /// Writeback, or any error raised by the syscall handler. The CPU state is left
    /// as it was at the failure point so the caller can dump it.
    pub fn tick(&mut self) -> Result<()> {
        self.cpu.stats.cycles += 1;
        let mut stages: [&mut dyn PipelineStage; 5] = [
            &mut self.fetch,
            &mut self.decode,
            &mut self.execute,
            &mut self.memory,
            &mut self.writeback,
        ];
        for stage in &mut stages {
            stage.rising(&mut self.cpu)?;
        }
        for stage in &mut stages {
            stage.falling(&mut self.cpu)?;
        }
        Ok(())
    }

    /// Runs until the program exits or the instruction budget drains.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Simulator::tick`].
    pub fn run(&mut self) -> Result<RunOutcome> {
        loop {
            if let Some(code) = self.cpu.exit_code {
                info!(cycles = self.cpu.stats.cycles, code, "program exited");
                return Ok(RunOutcome::Exited(code));
            }
            if self.fetch.exhausted(&self.cpu) && self.cpu.pipeline_is_empty() {
                info!(cycles = self.cpu.stats.cycles, "instruction budget drained");
                return Ok(RunOutcome::BudgetDrained);
            }
            self.tick()?;
        }
    }

    /// Retrieves the exit code if the program has requested exit.
    pub fn take_exit(&mut self) -> Option<u32> {
        self.cpu.take_exit()
    }
}
