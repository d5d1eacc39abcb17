//! # Configuration Tests
//!
//! Defaults, JSON deserialization and file loading of the generator
//! configuration.

use std::fs;
use std::path::PathBuf;

use nyuzi_mc_core::Error;
use nyuzi_mc_core::config::GeneratorConfig;
use nyuzi_mc_core::generator::ImmediateSource;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = GeneratorConfig::default();
    assert_eq!(config.assembler_corpus, PathBuf::from("assembler-tests.s"));
    assert_eq!(config.disassembler_corpus, PathBuf::from("disassembler-tests.s"));
    assert_eq!(config.program, None);
    assert_eq!(config.program_name(), "make_tests");
    assert_eq!(config.arch, "nyuzi");
    assert_eq!(config.immediates, None);
    assert_eq!(config.check_column, 32);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(GeneratorConfig::from_json("{}").unwrap(), GeneratorConfig::default());
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let config = GeneratorConfig::from_json(r#"{ "seed": 9, "check_column": 40 }"#).unwrap();
    assert_eq!(config.seed, 9);
    assert_eq!(config.check_column, 40);
    assert_eq!(config.program_name(), "make_tests");
}

#[test]
fn test_wrong_type_is_rejected() {
    let err = GeneratorConfig::from_json(r#"{ "seed": "nine" }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_serialize_round_trip() {
    let config = GeneratorConfig {
        immediates: Some(vec![1, -2, 3]),
        ..GeneratorConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{ "program": "regen", "arch": "nyuzi" }"#).unwrap();
    let config = GeneratorConfig::load(file.path()).unwrap();
    assert_eq!(config.program.as_deref(), Some("regen"));
    assert_eq!(config.program_name(), "regen");
}

#[test]
fn test_load_missing_file() {
    let err = GeneratorConfig::load(&PathBuf::from("/nonexistent/corpus.json")).unwrap_err();
    match err {
        Error::ReadConfig { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/corpus.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_immediate_source_selection() {
    let fixed = GeneratorConfig {
        immediates: Some(vec![17]),
        ..GeneratorConfig::default()
    };
    assert_eq!(fixed.immediate_source().next_in(0, 255), 17);

    let seeded = GeneratorConfig {
        seed: 1,
        ..GeneratorConfig::default()
    };
    assert_eq!(seeded.immediate_source().next_in(0, 255), 0x41);
}
