//! System-on-Chip (SoC) Components.
//!
//! The simulated system is a single core attached to a flat memory array; this module
//! holds the memory collaborator interface and its default implementation.

/// Flat backing memory and big-endian sub-word helpers.
pub mod memory;

/// Memory trait definition.
pub mod traits;

pub use memory::FlatMemory;
pub use traits::Memory;
