//! Full audit tests.
//!
//! The audit is run against the software-backed stub for exact control over
//! values, and against the simulated board to exercise the real register path.

use hdlbench_core::accel::AccelRegister;
use hdlbench_core::bench::run_full_audit;
use hdlbench_core::config::Config;
use hdlbench_core::console::ScriptedConsole;
use hdlbench_core::timer::StepCounter;
use pretty_assertions::assert_eq;

use crate::common::harness::{default_system, init_logging, system_from};
use crate::common::mocks::{StubAccelerator, counter_with_readings};

const MATCHED_AUDIT: &str = "\x0C\n--- FINAL PERFORMANCE AUDIT ---\n\
    [1] Square Root (Input: 123456)\n\
    \x20   STATUS: ACCURACY VERIFIED (MATCH)\n\
    \x20   HW Cycles: 1\n\
    \x20   SW Cycles: 1\n\
    \x20   Speedup: 1x FASTER\n\
    \n\
    [2] CRC-32 (Input: 0xDEADBEEF)\n\
    \x20   STATUS: ACCURACY VERIFIED (MATCH)\n\
    \x20   HW Cycles: 1\n\
    \x20   SW Cycles: 1\n\
    \x20   Speedup: 1x FASTER\n";

#[test]
fn test_audit_with_matching_stub() {
    init_logging();
    let mut accel = StubAccelerator::new();
    let mut counter = StepCounter::new(0, 1);
    let mut console = ScriptedConsole::new("");

    let report = run_full_audit(&mut accel, &mut counter, &mut console);

    assert_eq!(console.output_text(), MATCHED_AUDIT);
    assert_eq!(report.trials.len(), 2);
    assert!(report.all_matched());
    assert_eq!(report.trials[0].name, "Square Root");
    assert_eq!(report.trials[1].input, "0xDEADBEEF");
}

#[test]
fn test_audit_programs_polynomial_before_crc() {
    let mut accel = StubAccelerator::new();
    let mut counter = StepCounter::new(0, 1);
    let mut console = ScriptedConsole::new("");

    let _ = run_full_audit(&mut accel, &mut counter, &mut console);

    assert_eq!(
        accel.writes,
        vec![
            (AccelRegister::Sqrt, 123_456),
            (AccelRegister::CrcPoly, 0xEDB8_8320),
            (AccelRegister::CrcData, 0xDEAD_BEEF),
        ]
    );
}

#[test]
fn test_audit_sqrt_mismatch_does_not_stop_crc() {
    init_logging();
    let mut accel = StubAccelerator::with_sqrt_fault(0x4);
    let mut counter = StepCounter::new(0, 1);
    let mut console = ScriptedConsole::new("");

    let report = run_full_audit(&mut accel, &mut counter, &mut console);

    assert!(!report.all_matched());
    assert!(!report.trials[0].outcome.matched);
    assert!(report.trials[1].outcome.matched);
    let mismatched: Vec<_> = report.mismatches().map(|t| t.name).collect();
    assert_eq!(mismatched, vec!["Square Root"]);

    let text = console.output_text();
    assert_eq!(text.matches("STATUS: FAILURE (MISMATCH)").count(), 1);
    assert_eq!(text.matches("STATUS: ACCURACY VERIFIED (MATCH)").count(), 1);
    assert!(text.find("MISMATCH") < text.find("[2] CRC-32"));
}

#[test]
fn test_audit_speedups_from_counter_readings() {
    let mut accel = StubAccelerator::new();
    let mut counter = counter_with_readings(vec![0, 10, 10, 260, 300, 302, 302, 402]);
    let mut console = ScriptedConsole::new("");

    let report = run_full_audit(&mut accel, &mut counter, &mut console);

    assert_eq!(report.trials[0].outcome.speedup, Some(25));
    assert_eq!(report.trials[1].outcome.speedup, Some(50));
    let text = console.output_text();
    assert!(text.contains("    Speedup: 25x FASTER\n"));
    assert!(text.contains("    Speedup: 50x FASTER\n"));
}

#[test]
fn test_audit_zero_hardware_cycles_is_undefined() {
    let mut accel = StubAccelerator::new();
    let mut counter = counter_with_readings(vec![5, 5, 5, 9, 9, 9, 9, 12]);
    let mut console = ScriptedConsole::new("");

    let report = run_full_audit(&mut accel, &mut counter, &mut console);

    assert!(report.trials.iter().all(|t| t.outcome.speedup.is_none()));
    assert_eq!(
        console.output_text().matches("Speedup: undefined (HW Cycles = 0)").count(),
        2
    );
}

#[test]
fn test_audit_on_simulated_board() {
    let mut system = default_system();
    let mut counter = StepCounter::new(0, 1);
    let mut console = ScriptedConsole::new("");

    let report = run_full_audit(&mut system, &mut counter, &mut console);
    assert!(report.all_matched());
    assert_eq!(report.trials[0].outcome.hardware.value, 351);
}

#[test]
fn test_audit_ignores_reset_polynomial() {
    let mut config = Config::default();
    config.accelerator.crc_reset_polynomial = 0x04C1_1DB7;
    let mut system = system_from(&config);
    let mut counter = StepCounter::new(0, 1);
    let mut console = ScriptedConsole::new("");

    assert!(run_full_audit(&mut system, &mut counter, &mut console).all_matched());
}

#[test]
fn test_audit_with_crc_fault_injection() {
    let mut config = Config::default();
    config.accelerator.crc_fault_mask = 0x1;
    let mut system = system_from(&config);
    let mut counter = StepCounter::new(0, 1);
    let mut console = ScriptedConsole::new("");

    let report = run_full_audit(&mut system, &mut counter, &mut console);
    assert!(report.trials[0].outcome.matched);
    assert!(!report.trials[1].outcome.matched);
}

#[test]
fn test_audit_report_serializes() {
    let mut accel = StubAccelerator::new();
    let mut counter = StepCounter::new(0, 1);
    let mut console = ScriptedConsole::new("");
    let report = run_full_audit(&mut accel, &mut counter, &mut console);

    let json = match serde_json::to_value(&report) {
        Ok(json) => json,
        Err(e) => panic!("serialize: {e}"),
    };
    assert_eq!(json["trials"][0]["name"], "Square Root");
    assert_eq!(json["trials"][0]["outcome"]["matched"], true);
    assert_eq!(json["trials"][1]["outcome"]["speedup"], 1);
    assert_eq!(json["trials"][1]["outcome"]["hardware"]["value"], json["trials"][1]["outcome"]["software"]["value"]);
}
