//! Full performance audit.
//!
//! Two trials, always in this order and always with these operands:
//! 1. square root of 123456;
//! 2. CRC-32 of `0xDEADBEEF` with polynomial `0xEDB88320`, programmed before
//!    the timing bracket opens.
//!
//! A mismatch is reported and the audit carries on.

use std::hint;

use serde::Serialize;

use super::report::{render_header, render_outcome, render_trial_title};
use super::{BenchmarkOutcome, run_trial};
use crate::accel::AcceleratorProxy;
use crate::common::constants::{CRC_AUDIT_INPUT, CRC_AUDIT_POLYNOMIAL, SQRT_AUDIT_INPUT};
use crate::console::Console;
use crate::reference::{software_crc32, software_isqrt};
use crate::timer::CycleCounter;

/// One audited function and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialRecord {
    /// Human-readable name of the function under test.
    pub name: &'static str,
    /// Operand as shown in the report.
    pub input: String,
    /// Timings and verdict.
    pub outcome: BenchmarkOutcome,
}

/// Ordered trial records of one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Trials in execution order.
    pub trials: Vec<TrialRecord>,
}

impl AuditReport {
    /// Returns whether every trial matched.
    pub fn all_matched(&self) -> bool {
        self.trials.iter().all(|t| t.outcome.matched)
    }

    /// Returns the trials whose values differed.
    pub fn mismatches(&self) -> impl Iterator<Item = &TrialRecord> {
        self.trials.iter().filter(|t| !t.outcome.matched)
    }
}

/// Runs the fixed audit and renders it to `console`.
///
/// # Returns
///
/// The trial records, in execution order.
pub fn run_full_audit<A, T, C>(accel: &mut A, timer: &mut T, console: &mut C) -> AuditReport
where
    A: AcceleratorProxy + ?Sized,
    T: CycleCounter + ?Sized,
    C: Console + ?Sized,
{
    tracing::info!("starting performance audit");
    let mut report = AuditReport::default();
    render_header(console);

    let sqrt = TrialRecord {
        name: "Square Root",
        input: SQRT_AUDIT_INPUT.to_string(),
        outcome: run_trial(
            timer,
            || accel.sqrt(hint::black_box(SQRT_AUDIT_INPUT)),
            || software_isqrt(hint::black_box(SQRT_AUDIT_INPUT)),
        ),
    };
    record(&mut report, console, sqrt);

    accel.set_crc_polynomial(CRC_AUDIT_POLYNOMIAL);
    let crc = TrialRecord {
        name: "CRC-32",
        input: format!("{CRC_AUDIT_INPUT:#X}"),
        outcome: run_trial(
            timer,
            || accel.crc32(hint::black_box(CRC_AUDIT_INPUT)),
            || software_crc32(hint::black_box(CRC_AUDIT_INPUT), CRC_AUDIT_POLYNOMIAL),
        ),
    };
    record(&mut report, console, crc);

    tracing::info!(all_matched = report.all_matched(), "performance audit finished");
    report
}

/// Logs and renders a finished trial, then appends it to the report.
fn record<C: Console + ?Sized>(report: &mut AuditReport, console: &mut C, trial: TrialRecord) {
    let outcome = &trial.outcome;
    tracing::debug!(
        trial = trial.name,
        hw_value = outcome.hardware.value,
        sw_value = outcome.software.value,
        hw_cycles = outcome.hardware.elapsed(),
        sw_cycles = outcome.software.elapsed(),
        speedup = ?outcome.speedup,
        "trial complete"
    );
    if !outcome.matched {
        tracing::warn!(
            trial = trial.name,
            "accelerator returned {:#x}, software reference {:#x}",
            outcome.hardware.value,
            outcome.software.value
        );
    }

    render_trial_title(console, report.trials.len() + 1, &trial);
    render_outcome(console, outcome);
    report.trials.push(trial);
}
