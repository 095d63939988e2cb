//! Cycle counters used to bracket timed operations.
//!
//! Every trial is measured by reading a [`CycleCounter`] immediately before and
//! immediately after the operation. The module provides:
//! 1. **Host counter:** A monotonic clock scaled to a notional cycle rate, for
//!    non-embedded hosts.
//! 2. **RISC-V counter:** The `cycle` CSR read with `rdcycle`, on RISC-V targets.
//! 3. **Step counter:** A deterministic counter for reproducible dry runs.
//!
//! All counters are 32 bits wide and wrap after 2^32 cycles. Elapsed times are
//! computed with wrapping subtraction, so a single wrap inside a bracket is
//! harmless; a bracket longer than a full counter period is not detectable.

use crate::common::{ConfigError, Result};
use crate::config::{TimerConfig, TimerSource};

/// Source of a monotonically non-decreasing 32-bit cycle count.
pub trait CycleCounter {
    /// Returns the current cycle count since an arbitrary epoch.
    fn cycles(&mut self) -> u32;
}

impl<T: CycleCounter + ?Sized> CycleCounter for Box<T> {
    fn cycles(&mut self) -> u32 {
        (**self).cycles()
    }
}

/// Monotonic host clock scaled to a notional processor frequency.
///
/// The epoch is the moment of construction, so the first read is close to zero.
#[cfg(unix)]
#[derive(Debug)]
pub struct HostCycleCounter {
    rate_hz: u64,
    epoch_ns: u128,
}

#[cfg(unix)]
impl HostCycleCounter {
    /// Nanoseconds per second.
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    /// Creates a counter ticking at `rate_hz` notional cycles per second.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `rate_hz` is zero.
    pub fn new(rate_hz: u64) -> Result<Self> {
        if rate_hz == 0 {
            return Err(ConfigError::invalid(
                "timer.cycle_rate_hz",
                "cycle rate must be non-zero",
            ));
        }
        Ok(Self {
            rate_hz,
            epoch_ns: monotonic_ns(),
        })
    }

    /// Returns the notional cycle rate.
    pub const fn rate_hz(&self) -> u64 {
        self.rate_hz
    }
}

#[cfg(unix)]
impl CycleCounter for HostCycleCounter {
    #[inline(always)]
    fn cycles(&mut self) -> u32 {
        let elapsed = monotonic_ns().saturating_sub(self.epoch_ns);
        (elapsed * u128::from(self.rate_hz) / Self::NANOS_PER_SEC) as u32
    }
}

/// Reads `CLOCK_MONOTONIC` in nanoseconds.
#[cfg(unix)]
#[inline(always)]
fn monotonic_ns() -> u128 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec and CLOCK_MONOTONIC is supported on
    // every unix target; the call only writes through the provided pointer.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &raw mut ts) };
    if rc != 0 {
        return 0;
    }
    (ts.tv_sec as u128) * 1_000_000_000 + (ts.tv_nsec as u128)
}

/// The RISC-V `cycle` CSR.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct RdCycleCounter;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
impl CycleCounter for RdCycleCounter {
    #[inline(always)]
    fn cycles(&mut self) -> u32 {
        let cycles: usize;
        // SAFETY: `rdcycle` only reads a user-visible counter CSR into a register.
        unsafe {
            core::arch::asm!("rdcycle {0}", out(reg) cycles, options(nomem, nostack));
        }
        cycles as u32
    }
}

/// Deterministic counter that advances by a fixed step on every read.
#[derive(Debug, Clone)]
pub struct StepCounter {
    now: u32,
    step: u32,
}

impl StepCounter {
    /// Creates a counter starting at `start` that advances `step` per read.
    pub const fn new(start: u32, step: u32) -> Self {
        Self { now: start, step }
    }
}

impl CycleCounter for StepCounter {
    fn cycles(&mut self) -> u32 {
        let now = self.now;
        self.now = self.now.wrapping_add(self.step);
        now
    }
}

/// Builds the counter selected by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedTimer`] when the source does not exist on the
/// current target, and [`ConfigError::InvalidValue`] for a zero rate or step.
pub fn from_config(config: &TimerConfig) -> Result<Box<dyn CycleCounter>> {
    match config.source {
        TimerSource::Host => host_counter(config.cycle_rate_hz),
        TimerSource::Step => {
            if config.step == 0 {
                return Err(ConfigError::invalid("timer.step", "step must be non-zero"));
            }
            Ok(Box::new(StepCounter::new(0, config.step)))
        }
        TimerSource::RdCycle => rdcycle_counter(),
    }
}

#[cfg(unix)]
fn host_counter(rate_hz: u64) -> Result<Box<dyn CycleCounter>> {
    Ok(Box::new(HostCycleCounter::new(rate_hz)?))
}

#[cfg(not(unix))]
fn host_counter(_rate_hz: u64) -> Result<Box<dyn CycleCounter>> {
    Err(ConfigError::UnsupportedTimer("host"))
}

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
fn rdcycle_counter() -> Result<Box<dyn CycleCounter>> {
    Ok(Box::new(RdCycleCounter))
}

#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
fn rdcycle_counter() -> Result<Box<dyn CycleCounter>> {
    Err(ConfigError::UnsupportedTimer("rdcycle"))
}
