//! Accelerator-versus-software benchmark engine.
//!
//! This module times paired hardware and software executions and derives the
//! audit verdicts. It provides:
//! 1. **Trials:** [`run_trial`] brackets each operation with cycle-counter reads.
//! 2. **Outcomes:** [`BenchmarkOutcome`] holds both timings, the exact-equality
//!    verdict, and the integer speedup.
//! 3. **Audit:** [`run_full_audit`] runs the fixed square-root and CRC-32 trials.
//! 4. **Reporting:** Console rendering of each trial.

/// Fixed two-trial audit.
pub mod audit;

/// Console rendering of trial outcomes.
pub mod report;

pub use audit::{AuditReport, TrialRecord, run_full_audit};

use std::hint;
use std::sync::atomic::{Ordering, compiler_fence};

use serde::Serialize;

use crate::timer::CycleCounter;

/// Value produced by one timed operation and the counter readings around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimedResult {
    /// Value returned by the operation.
    pub value: u32,
    /// Counter reading taken immediately before the operation.
    pub start_cycle: u32,
    /// Counter reading taken immediately after the operation returned.
    pub end_cycle: u32,
}

impl TimedResult {
    /// Cycles between the two readings.
    ///
    /// Uses wrapping subtraction, which is exact if the counter wrapped at most once.
    pub const fn elapsed(&self) -> u32 {
        self.end_cycle.wrapping_sub(self.start_cycle)
    }
}

/// Result of one paired hardware/software trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkOutcome {
    /// Accelerator execution.
    pub hardware: TimedResult,
    /// Software reference execution.
    pub software: TimedResult,
    /// Whether both executions produced exactly the same value.
    pub matched: bool,
    /// `software.elapsed / hardware.elapsed`, or `None` when the hardware took zero cycles.
    pub speedup: Option<u32>,
}

impl BenchmarkOutcome {
    /// Derives the verdict and speedup from two timed executions.
    pub const fn new(hardware: TimedResult, software: TimedResult) -> Self {
        Self {
            hardware,
            software,
            matched: hardware.value == software.value,
            speedup: software.elapsed().checked_div(hardware.elapsed()),
        }
    }
}

/// Times `op` between two counter reads.
///
/// The compiler fences keep the counter reads from being reordered across the
/// operation; nothing else runs inside the bracket.
#[inline(always)]
fn time<T, F>(timer: &mut T, op: F) -> TimedResult
where
    T: CycleCounter + ?Sized,
    F: FnOnce() -> u32,
{
    let start_cycle = timer.cycles();
    compiler_fence(Ordering::SeqCst);
    let value = hint::black_box(op());
    compiler_fence(Ordering::SeqCst);
    let end_cycle = timer.cycles();
    TimedResult {
        value,
        start_cycle,
        end_cycle,
    }
}

/// Runs one trial: the hardware operation, then the software reference.
///
/// Each operation is bracketed by `timer` reads taken immediately before the call
/// and immediately after it returns.
pub fn run_trial<T, H, S>(timer: &mut T, hardware_op: H, software_op: S) -> BenchmarkOutcome
where
    T: CycleCounter + ?Sized,
    H: FnOnce() -> u32,
    S: FnOnce() -> u32,
{
    let hardware = time(timer, hardware_op);
    let software = time(timer, software_op);
    BenchmarkOutcome::new(hardware, software)
}
