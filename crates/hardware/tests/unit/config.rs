//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading, and validation.

use std::io::Write;

use hdlbench_core::common::ConfigError;
use hdlbench_core::config::*;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.system.sqrt_base, 0x4000_0000);
    assert_eq!(config.system.crc_base, 0x6000_0000);
    assert_eq!(config.system.uart_data, 0x2000_0000);
    assert_eq!(config.accelerator.settle_spins, 0);
    assert_eq!(config.accelerator.sqrt_fault_mask, 0);
    assert_eq!(config.accelerator.crc_fault_mask, 0);
    assert_eq!(config.accelerator.crc_reset_polynomial, 0xEDB8_8320);
    assert_eq!(config.timer.source, TimerSource::Host);
    assert_eq!(config.timer.cycle_rate_hz, 100_000_000);
    assert_eq!(config.timer.step, 1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_is_default() {
    let config = match Config::from_json_str("{}") {
        Ok(config) => config,
        Err(e) => panic!("empty config rejected: {e}"),
    };
    assert_eq!(config.system.sqrt_base, SystemConfig::default().sqrt_base);
    assert_eq!(config.timer.step, TimerConfig::default().step);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let json = r#"{ "accelerator": { "crc_fault_mask": 255 } }"#;
    let config = match Config::from_json_str(json) {
        Ok(config) => config,
        Err(e) => panic!("config rejected: {e}"),
    };
    assert_eq!(config.accelerator.crc_fault_mask, 0xFF);
    assert_eq!(config.accelerator.crc_reset_polynomial, 0xEDB8_8320);
    assert_eq!(config.system.crc_base, 0x6000_0000);
}

#[rstest]
#[case::pascal(r#""Step""#, TimerSource::Step)]
#[case::host(r#""Host""#, TimerSource::Host)]
#[case::rdcycle(r#""RdCycle""#, TimerSource::RdCycle)]
#[case::rdcycle_alias(r#""RDCYCLE""#, TimerSource::RdCycle)]
fn test_timer_source_names(#[case] name: &str, #[case] expected: TimerSource) {
    let json = format!(r#"{{ "timer": {{ "source": {name} }} }}"#);
    match Config::from_json_str(&json) {
        Ok(config) => assert_eq!(config.timer.source, expected),
        Err(e) => panic!("{name} rejected: {e}"),
    }
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Config::from_json_str("{ \"timer\": "),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_unknown_timer_source() {
    assert!(matches!(
        Config::from_json_str(r#"{ "timer": { "source": "Sundial" } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[rstest]
#[case::zero_rate(r#"{ "timer": { "cycle_rate_hz": 0 } }"#, "timer.cycle_rate_hz")]
#[case::zero_step(r#"{ "timer": { "step": 0 } }"#, "timer.step")]
fn test_validate_rejects_zero(#[case] json: &str, #[case] expected_field: &str) {
    match Config::from_json_str(json) {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[rstest]
#[case::crc_at_top(r#"{ "system": { "crc_base": 18446744073709551614 } }"#, "system.crc_base")]
#[case::sqrt_at_top(r#"{ "system": { "sqrt_base": 18446744073709547520 } }"#, "system.sqrt_base")]
fn test_validate_rejects_window_past_address_space(
    #[case] json: &str,
    #[case] expected_field: &str,
) {
    match Config::from_json_str(json) {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_validate_accepts_window_ending_at_top() {
    // Base 2^64 - 0x1001: the window ends exactly at u64::MAX.
    let json = r#"{ "system": { "crc_base": 18446744073709547519 } }"#;
    assert!(Config::from_json_str(json).is_ok());
}

#[test]
fn test_validate_rejects_overlapping_windows() {
    let json = r#"{ "system": { "sqrt_base": 1610612736, "crc_base": 1610612740 } }"#;
    match Config::from_json_str(json) {
        Err(ConfigError::AddressOverlap { first, second, .. }) => {
            assert_eq!(first, "FPSQRT");
            assert_eq!(second, "CRC32");
        }
        other => panic!("expected AddressOverlap, got {other:?}"),
    }
}

#[test]
fn test_from_file() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(file) => file,
        Err(e) => panic!("tempfile: {e}"),
    };
    let written = file.write_all(br#"{ "accelerator": { "settle_spins": 16 }, "timer": { "source": "Step", "step": 7 } }"#);
    assert!(written.is_ok());

    let config = match Config::from_file(file.path()) {
        Ok(config) => config,
        Err(e) => panic!("from_file: {e}"),
    };
    assert_eq!(config.accelerator.settle_spins, 16);
    assert_eq!(config.timer.source, TimerSource::Step);
    assert_eq!(config.timer.step, 7);
}

#[test]
fn test_from_file_missing() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("tempdir: {e}"),
    };
    let path = dir.path().join("absent.json");
    match Config::from_file(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
