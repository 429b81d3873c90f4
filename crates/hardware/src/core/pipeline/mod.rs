//! Two-phase five-stage pipeline.
//!
//! This module contains the in-order MIPS pipeline. It includes the following components:
//! 1. **Hazards:** Decode-time stall decisions (load-use, Hi/Lo, store operands).
//! 2. **Latches:** The fetch entry and the control record relayed between stages.
//! 3. **Signals:** The closed `Op`/`MemOp` selectors Decode binds to each record.
//! 4. **Stages:** Fetch, Decode, Execute, Memory and Writeback, each with a rising and falling step.
//! 5. **Traits:** The stage and latch interfaces the simulator drives.

/// Decode-time hazard detection.
pub mod hazards;

/// IF/ID entry and the ID/EX, EX/MEM, MEM/WB control record.
pub mod latches;

/// Operation selectors bound at decode.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

/// Stage and latch traits.
pub mod traits;
