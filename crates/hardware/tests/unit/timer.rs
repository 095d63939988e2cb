//! Cycle counter selection tests.

use hdlbench_core::common::ConfigError;
use hdlbench_core::config::{TimerConfig, TimerSource};
use hdlbench_core::timer::{self, CycleCounter, StepCounter};

fn step_config(step: u32) -> TimerConfig {
    TimerConfig {
        source: TimerSource::Step,
        step,
        ..TimerConfig::default()
    }
}

#[test]
fn test_from_config_step_counter() {
    let mut counter = match timer::from_config(&step_config(4)) {
        Ok(counter) => counter,
        Err(e) => panic!("step counter: {e}"),
    };
    assert_eq!(counter.cycles(), 0);
    assert_eq!(counter.cycles(), 4);
    assert_eq!(counter.cycles(), 8);
}

#[test]
fn test_from_config_rejects_zero_step() {
    assert!(matches!(
        timer::from_config(&step_config(0)),
        Err(ConfigError::InvalidValue {
            field: "timer.step",
            ..
        })
    ));
}

#[cfg(unix)]
#[test]
fn test_from_config_host_counter() {
    let mut counter = match timer::from_config(&TimerConfig::default()) {
        Ok(counter) => counter,
        Err(e) => panic!("host counter: {e}"),
    };
    let first = counter.cycles();
    let second = counter.cycles();
    assert!(second >= first);
}

#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
#[test]
fn test_from_config_rdcycle_unavailable_off_target() {
    let config = TimerConfig {
        source: TimerSource::RdCycle,
        ..TimerConfig::default()
    };
    assert!(matches!(
        timer::from_config(&config),
        Err(ConfigError::UnsupportedTimer("rdcycle"))
    ));
}

#[test]
fn test_step_counter_elapsed_across_wrap() {
    let mut counter = StepCounter::new(u32::MAX - 4, 10);
    let start = counter.cycles();
    let end = counter.cycles();
    assert_eq!(end, 5);
    assert_eq!(end.wrapping_sub(start), 10);
}
