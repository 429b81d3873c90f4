//! Pipeline stage implementations.
//!
//! This module contains one type per stage. Each implements
//! [`PipelineStage`](crate::core::pipeline::traits::PipelineStage):
//! 1. **Fetch:** Supplies `(pc, word)` into IF/ID and honours the stall counters.
//! 2. **Decode:** Builds the control record and decides stalls.
//! 3. **Execute:** Runs the operation, resolves branches and forwards ALU results.
//! 4. **Memory:** Performs loads and stores and commits deferred load values.
//! 5. **Writeback:** Commits architectural state and services syscalls.

/// Instruction decode stage implementation.
pub mod decode;

/// Execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage (ID).
pub use decode::DecodeStage;
/// Execute stage (EX).
pub use execute::ExecuteStage;
/// Fetch stage (IF).
pub use fetch::FetchStage;
/// Memory stage (MEM).
pub use memory::MemoryStage;
/// Writeback stage (WB).
pub use writeback::WritebackStage;
