//! Pipeline Stage and Latch Interfaces.
//!
//! This module defines the common traits for pipeline components. It provides:
//! 1. **Pipeline Stage Interface:** The two clock phases every stage implements.
//! 2. **Pipeline Latch Interface:** Methods for flushing and status checking.

use crate::common::Result;
use crate::core::Cpu;

/// Represents a stage in the instruction pipeline.
///
/// Every tick the simulator calls `rising` on all stages, in pipeline order,
/// and only then `falling` on all stages in the same order. Rising captures the
/// upstream latch and computes; falling commits to the bypass file, memory,
/// stall counters and the downstream latch.
pub trait PipelineStage {
    /// Rising-edge step.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Mutable reference to the CPU state.
    ///
    /// # Errors
    ///
    /// Writeback returns an error when an illegal instruction arrives or the
    /// syscall layer fails; the other stages never fail.
    fn rising(&mut self, cpu: &mut Cpu) -> Result<()>;

    /// Falling-edge step.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Mutable reference to the CPU state.
    ///
    /// # Errors
    ///
    /// See [`PipelineStage::rising`].
    fn falling(&mut self, cpu: &mut Cpu) -> Result<()>;
}

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Replaces the contents with a bubble.
    fn flush(&mut self);

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if there is no valid instruction in the latch.
    fn is_empty(&self) -> bool;
}
