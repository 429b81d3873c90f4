//! # Configuration Tests
//!
//! Defaults, partial JSON overrides and malformed documents.

use mipsim_core::common::SimError;
use mipsim_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace);
    assert_eq!(config.general.start_pc, None);
    assert_eq!(config.general.stack_pointer, 0x7fff_fff0);
    assert_eq!(config.general.max_instructions, None);
    assert_eq!(config.memory.load_base, 0x0040_0000);
}

#[test]
fn test_pipeline_defaults() {
    let pipeline = PipelineConfig::default();
    assert_eq!(pipeline.load_use_stall, 2);
    let expected = StageStalls {
        execute: 4,
        memory: 3,
        writeback: 2,
    };
    assert_eq!(pipeline.hilo_stall, expected);
    assert_eq!(pipeline.store_stall, expected);
}

#[test]
fn test_empty_document_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.pipeline, PipelineConfig::default());
    assert_eq!(config.memory.load_base, 0x0040_0000);
}

#[test]
fn test_partial_override_keeps_sibling_defaults() {
    let json = r#"{
        "general": { "start_pc": 4096 },
        "pipeline": { "hilo_stall": { "execute": 6 } }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.start_pc, Some(4096));
    assert_eq!(config.general.stack_pointer, 0x7fff_fff0);
    assert_eq!(config.pipeline.hilo_stall.execute, 6);
    assert_eq!(config.pipeline.hilo_stall.memory, 3);
    assert_eq!(config.pipeline.store_stall.execute, 4);
    assert_eq!(config.pipeline.load_use_stall, 2);
}

#[test]
fn test_memory_override() {
    let config = Config::from_json(r#"{ "memory": { "load_base": 65536 } }"#).unwrap();
    assert_eq!(config.memory.load_base, 0x1_0000);
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = Config::from_json("{ general: ").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn test_wrong_type_is_config_error() {
    let err = Config::from_json(r#"{ "general": { "trace": "yes" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}
