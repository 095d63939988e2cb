//! Console rendering of audit results.
//!
//! Each trial is reported as a title line followed by four data lines, in this
//! order: the correctness verdict, hardware cycles, software cycles, and speedup.

use super::BenchmarkOutcome;
use super::audit::TrialRecord;
use crate::console::{Console, ConsoleExt};

/// Renders the audit banner.
pub fn render_header<C: Console + ?Sized>(console: &mut C) {
    console.print("\x0C\n--- FINAL PERFORMANCE AUDIT ---\n");
}

/// Renders `[n] Name (Input: operand)`; trials after the first are preceded by a blank line.
pub fn render_trial_title<C: Console + ?Sized>(console: &mut C, index: usize, trial: &TrialRecord) {
    if index > 1 {
        console.print("\n");
    }
    console.print(&format!("[{index}] {} (Input: {})\n", trial.name, trial.input));
}

/// Renders the verdict, both cycle counts, and the speedup of one trial.
pub fn render_outcome<C: Console + ?Sized>(console: &mut C, outcome: &BenchmarkOutcome) {
    if outcome.matched {
        console.print("    STATUS: ACCURACY VERIFIED (MATCH)\n");
    } else {
        console.print("    STATUS: FAILURE (MISMATCH)\n");
    }

    console.print("    HW Cycles: ");
    console.print_dec(outcome.hardware.elapsed());
    console.print("\n");

    console.print("    SW Cycles: ");
    console.print_dec(outcome.software.elapsed());
    console.print("\n");

    console.print("    Speedup: ");
    match outcome.speedup {
        Some(factor) => {
            console.print_dec(factor);
            console.print("x FASTER\n");
        }
        None => console.print("undefined (HW Cycles = 0)\n"),
    }
}
