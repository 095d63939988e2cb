//! Hardware accelerator audit harness.
//!
//! This crate exercises a square-root unit and a CRC-32 unit behind memory-mapped
//! registers and compares them against software references:
//! 1. **Parsing:** Console-driven decimal, hexadecimal, and polynomial operand entry.
//! 2. **Reference:** Software square root and CRC-32 used as the ground truth.
//! 3. **Benchmark:** Cycle-bracketed trials, correctness verdicts, and the fixed audit.
//! 4. **SoC:** A simulated register bus hosting both accelerators for non-embedded hosts.
//! 5. **Session:** The operator menu that ties the pieces together.

/// Accelerator register proxy (capability trait and volatile MMIO implementation).
pub mod accel;
/// Benchmark engine (trials, outcomes, audit, report rendering).
pub mod bench;
/// Common constants and error types.
pub mod common;
/// Harness configuration (register map, accelerator model, timer source).
pub mod config;
/// Character console transport (trait, scripted and stdio implementations).
pub mod console;
/// Operand parsers and the polynomial builder.
pub mod parse;
/// Software reference algorithms.
pub mod reference;
/// Operator menu loop.
pub mod session;
/// Simulated system-on-chip (builder, bus, accelerator devices, traits).
pub mod soc;
/// Cycle counter sources.
pub mod timer;

/// Capability trait for driving the accelerators.
pub use crate::accel::{AccelRegister, AcceleratorProxy};
/// Audit entry point and its report type.
pub use crate::bench::{AuditReport, BenchmarkOutcome, run_full_audit};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Simulated board; construct with `System::new`.
pub use crate::soc::System;
