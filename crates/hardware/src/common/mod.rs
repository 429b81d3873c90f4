//! Common utilities and types used throughout the MIPS pipeline simulator.
//!
//! This module provides building blocks shared by every stage. It includes:
//! 1. **Constants:** Instruction width, register and alignment masks, saturation values.
//! 2. **Error Handling:** The `SimError` taxonomy and the crate-wide `Result` alias.
//! 3. **Register Management:** The architectural file, bypass copy and write flags in one place.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for the simulator.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::INSTRUCTION_SIZE;
pub use error::{Result, SimError};
pub use reg::RegisterFile;
