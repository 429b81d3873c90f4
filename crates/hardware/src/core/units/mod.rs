//! Execution units and functional components.
//!
//! This module contains the combinational units the Execute and Memory stages
//! call into: the integer ALU (including the multiply/divide unit), the branch
//! resolution unit, and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: taken predicates and target formulas.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
