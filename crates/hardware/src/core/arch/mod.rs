//! MIPS architectural state components.
//!
//! This module contains the storage elements the pipeline reads and commits to.
//! It includes the following modules:
//! 1. **GPRs:** 32-entry integer register file (used for both the architectural and bypass copies).
//! 2. **FPRs:** 32 single-precision float registers, pairable into doubles.
//! 3. **Write flags:** Per-register "written this cycle" vector for deferred load commits.

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Per-register write-flag vector.
pub mod flags;
