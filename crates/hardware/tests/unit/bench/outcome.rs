//! Benchmark outcome and trial timing tests.

use std::cell::Cell;

use hdlbench_core::bench::{BenchmarkOutcome, TimedResult, run_trial};
use hdlbench_core::timer::StepCounter;
use rstest::rstest;

use crate::common::mocks::counter_with_readings;

fn timed(value: u32, start_cycle: u32, end_cycle: u32) -> TimedResult {
    TimedResult {
        value,
        start_cycle,
        end_cycle,
    }
}

#[rstest]
#[case::speedup_25(timed(351, 100, 110), timed(351, 200, 450), Some(25))]
#[case::truncates(timed(1, 0, 3), timed(1, 0, 10), Some(3))]
#[case::slower_hardware(timed(1, 0, 50), timed(1, 0, 10), Some(0))]
#[case::zero_hardware(timed(1, 7, 7), timed(1, 0, 10), None)]
fn test_outcome_speedup(
    #[case] hardware: TimedResult,
    #[case] software: TimedResult,
    #[case] speedup: Option<u32>,
) {
    let outcome = BenchmarkOutcome::new(hardware, software);
    assert_eq!(outcome.speedup, speedup);
    assert!(outcome.matched);
}

#[test]
fn test_outcome_mismatch_is_exact_equality() {
    let outcome = BenchmarkOutcome::new(timed(352, 0, 1), timed(351, 1, 2));
    assert!(!outcome.matched);
}

#[test]
fn test_elapsed_across_counter_wrap() {
    let result = timed(0, u32::MAX - 4, 5);
    assert_eq!(result.elapsed(), 10);
}

#[test]
fn test_run_trial_brackets_each_operation() {
    let mut counter = counter_with_readings(vec![100, 110, 200, 450]);
    let outcome = run_trial(&mut counter, || 12, || 12);

    assert_eq!(outcome.hardware, timed(12, 100, 110));
    assert_eq!(outcome.software, timed(12, 200, 450));
    assert!(outcome.matched);
    assert_eq!(outcome.speedup, Some(25));
}

#[test]
fn test_run_trial_hardware_runs_first() {
    let order = Cell::new(0u32);
    let mut counter = StepCounter::new(0, 1);
    let outcome = run_trial(
        &mut counter,
        || {
            order.set(order.get() * 10 + 1);
            1
        },
        || {
            order.set(order.get() * 10 + 2);
            2
        },
    );

    assert_eq!(order.get(), 12);
    assert_eq!(outcome.hardware.value, 1);
    assert_eq!(outcome.software.value, 2);
    assert!(!outcome.matched);
    assert_eq!(outcome.hardware.start_cycle, 0);
    assert_eq!(outcome.software.end_cycle, 3);
}

#[test]
fn test_run_trial_zero_elapsed_hardware() {
    let mut counter = counter_with_readings(vec![5, 5, 5, 9]);
    let outcome = run_trial(&mut counter, || 0, || 0);
    assert_eq!(outcome.hardware.elapsed(), 0);
    assert_eq!(outcome.speedup, None);
}
