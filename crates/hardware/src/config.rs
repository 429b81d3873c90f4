//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (entry point, stack, stall lengths).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Parsing:** JSON deserialization with per-field defaults.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::Result;

/// Default configuration constants for the simulator.
///
/// These values are used whenever a field is absent from the JSON document.
mod defaults {
    /// Load address for raw program images (the conventional MIPS text base).
    pub const LOAD_BASE: u32 = 0x0040_0000;

    /// Initial value of `$sp`.
    pub const STACK_POINTER: u32 = 0x7fff_fff0;

    /// Decode stall injected when an instruction reads the destination of a load in Execute.
    pub const LOAD_USE_STALL: u32 = 2;

    /// Stall when the producer is in Execute (one stage ahead of Decode).
    pub const STALL_FROM_EXECUTE: u32 = 4;

    /// Stall when the producer is in Memory (two stages ahead).
    pub const STALL_FROM_MEMORY: u32 = 3;

    /// Stall when the producer is in Writeback (three stages ahead).
    pub const STALL_FROM_WRITEBACK: u32 = 2;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace": true, "max_instructions": 1000 },
///     "pipeline": { "load_use_stall": 3 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.general.max_instructions, Some(1000));
/// assert_eq!(config.pipeline.load_use_stall, 3);
/// assert_eq!(config.pipeline.hilo_stall.execute, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Program placement
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Hazard stall lengths
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text; missing fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or `SimError::Config` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events.
    #[serde(default)]
    pub trace: bool,

    /// Overrides the program entry point when set.
    #[serde(default)]
    pub start_pc: Option<u32>,

    /// Initial `$sp` value.
    #[serde(default = "GeneralConfig::default_stack_pointer")]
    pub stack_pointer: u32,

    /// Number of instructions Fetch may supply before it starts issuing bubbles.
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

impl GeneralConfig {
    fn default_stack_pointer() -> u32 {
        defaults::STACK_POINTER
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            start_pc: None,
            stack_pointer: defaults::STACK_POINTER,
            max_instructions: None,
        }
    }
}

/// Program image placement.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Address at which raw (non-ELF) images are loaded; also their entry point.
    #[serde(default = "MemoryConfig::default_load_base")]
    pub load_base: u32,
}

impl MemoryConfig {
    fn default_load_base() -> u32 {
        defaults::LOAD_BASE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            load_base: defaults::LOAD_BASE,
        }
    }
}

/// Stall lengths indexed by how far ahead of Decode the producing instruction sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StageStalls {
    /// Producer currently in Execute.
    #[serde(default = "StageStalls::default_execute")]
    pub execute: u32,
    /// Producer currently in Memory.
    #[serde(default = "StageStalls::default_memory")]
    pub memory: u32,
    /// Producer currently in Writeback.
    #[serde(default = "StageStalls::default_writeback")]
    pub writeback: u32,
}

impl StageStalls {
    fn default_execute() -> u32 {
        defaults::STALL_FROM_EXECUTE
    }

    fn default_memory() -> u32 {
        defaults::STALL_FROM_MEMORY
    }

    fn default_writeback() -> u32 {
        defaults::STALL_FROM_WRITEBACK
    }
}

impl Default for StageStalls {
    fn default() -> Self {
        Self {
            execute: defaults::STALL_FROM_EXECUTE,
            memory: defaults::STALL_FROM_MEMORY,
            writeback: defaults::STALL_FROM_WRITEBACK,
        }
    }
}

/// Decode-side hazard policy.
///
/// These lengths are tuned to the five-stage layout; changing them changes
/// simulated cycle counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Stall for a consumer directly behind a load.
    #[serde(default = "PipelineConfig::default_load_use_stall")]
    pub load_use_stall: u32,

    /// Stall for `mfhi`/`mflo` behind a Hi/Lo producer.
    #[serde(default)]
    pub hilo_stall: StageStalls,

    /// Stall for a store whose registers are still being produced.
    #[serde(default)]
    pub store_stall: StageStalls,
}

impl PipelineConfig {
    fn default_load_use_stall() -> u32 {
        defaults::LOAD_USE_STALL
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            load_use_stall: defaults::LOAD_USE_STALL,
            hilo_stall: StageStalls::default(),
            store_stall: StageStalls::default(),
        }
    }
}
