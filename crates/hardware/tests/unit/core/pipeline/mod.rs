pub mod control_flow;
pub mod hilo;
pub mod latches;
pub mod traps;
