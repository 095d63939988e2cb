//! Configuration system for the audit harness.
//!
//! This module defines the configuration structures used to parameterize the
//! harness. It provides:
//! 1. **Defaults:** The register map and timing constants of the reference board.
//! 2. **Structures:** Hierarchical config for the register map, accelerator model, and timer.
//! 3. **Loading:** JSON parsing from a string or file, followed by validation.
//!
//! The fixed audit operands are deliberately absent: the audit produces a
//! reproducible, comparable claim and is not configurable.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{ConfigError, Result};

/// Default configuration constants for the harness.
mod defaults {
    use crate::common::constants;

    /// Base address of the square-root unit.
    pub const SQRT_BASE: u64 = constants::SQRT_BASE;

    /// Base address of the CRC-32 unit.
    pub const CRC_BASE: u64 = constants::CRC_BASE;

    /// Address of the UART data register.
    pub const UART_DATA: u64 = constants::UART_DATA_ADDR;

    /// Spin iterations after each register write (0 = the model settles instantly).
    pub const SETTLE_SPINS: u32 = 0;

    /// Polynomial held by the CRC unit out of reset.
    pub const CRC_RESET_POLYNOMIAL: u32 = constants::CRC32_IEEE_REFLECTED;

    /// Notional processor frequency for the host counter (100 MHz).
    pub const CYCLE_RATE_HZ: u64 = 100_000_000;

    /// Advance per read of the step counter.
    pub const STEP: u32 = 1;
}

/// Cycle counter implementations selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TimerSource {
    /// Host monotonic clock scaled to `cycle_rate_hz`.
    #[default]
    Host,
    /// Deterministic counter advancing `step` per read.
    Step,
    /// RISC-V `cycle` CSR (RISC-V targets only).
    #[serde(alias = "RDCYCLE")]
    RdCycle,
}

/// Root configuration structure.
///
/// Every field has a default, so `{}` is a valid configuration.
///
/// # Examples
///
/// ```
/// use hdlbench_core::config::{Config, TimerSource};
///
/// let json = r#"{
///     "system": { "crc_base": 1879048192 },
///     "accelerator": { "settle_spins": 10 },
///     "timer": { "source": "Step", "step": 3 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.system.crc_base, 0x7000_0000);
/// assert_eq!(config.accelerator.settle_spins, 10);
/// assert_eq!(config.timer.source, TimerSource::Step);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Register map.
    #[serde(default)]
    pub system: SystemConfig,
    /// Behaviour of the simulated accelerators.
    #[serde(default)]
    pub accelerator: AcceleratorConfig,
    /// Cycle counter selection.
    #[serde(default)]
    pub timer: TimerConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error reported by
    /// [`Config::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero cycle rate or step or a
    /// register window that would wrap the address space, and
    /// [`ConfigError::AddressOverlap`] if the accelerator windows collide.
    pub fn validate(&self) -> Result<()> {
        if self.timer.cycle_rate_hz == 0 {
            return Err(ConfigError::invalid(
                "timer.cycle_rate_hz",
                "cycle rate must be non-zero",
            ));
        }
        if self.timer.step == 0 {
            return Err(ConfigError::invalid("timer.step", "step must be non-zero"));
        }

        let window = crate::common::constants::ACCEL_WINDOW_SIZE;
        let (sqrt, crc) = (self.system.sqrt_base, self.system.crc_base);
        if sqrt.checked_add(window).is_none() {
            return Err(ConfigError::invalid(
                "system.sqrt_base",
                "register window runs past the end of the address space",
            ));
        }
        if crc.checked_add(window).is_none() {
            return Err(ConfigError::invalid(
                "system.crc_base",
                "register window runs past the end of the address space",
            ));
        }
        if sqrt < crc.saturating_add(window) && crc < sqrt.saturating_add(window) {
            return Err(ConfigError::AddressOverlap {
                first: "FPSQRT".to_string(),
                second: "CRC32".to_string(),
                addr: crc,
            });
        }
        Ok(())
    }
}

/// Physical register map.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Square-root unit base address.
    #[serde(default = "SystemConfig::default_sqrt_base")]
    pub sqrt_base: u64,

    /// CRC-32 unit base address (data at +0, polynomial at +4).
    #[serde(default = "SystemConfig::default_crc_base")]
    pub crc_base: u64,

    /// UART data register address, written by [`MmioConsole`](crate::console::MmioConsole).
    #[serde(default = "SystemConfig::default_uart_data")]
    pub uart_data: u64,
}

impl SystemConfig {
    fn default_sqrt_base() -> u64 {
        defaults::SQRT_BASE
    }

    fn default_crc_base() -> u64 {
        defaults::CRC_BASE
    }

    fn default_uart_data() -> u64 {
        defaults::UART_DATA
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            sqrt_base: defaults::SQRT_BASE,
            crc_base: defaults::CRC_BASE,
            uart_data: defaults::UART_DATA,
        }
    }
}

/// Behaviour of the simulated accelerator devices.
#[derive(Debug, Clone, Deserialize)]
pub struct AcceleratorConfig {
    /// Busy-wait iterations performed after each register write.
    #[serde(default = "AcceleratorConfig::default_settle_spins")]
    pub settle_spins: u32,

    /// XOR mask applied to every square-root result (0 = healthy unit).
    #[serde(default)]
    pub sqrt_fault_mask: u32,

    /// XOR mask applied to every CRC result (0 = healthy unit).
    #[serde(default)]
    pub crc_fault_mask: u32,

    /// Polynomial held by the CRC unit out of reset.
    #[serde(default = "AcceleratorConfig::default_crc_reset_polynomial")]
    pub crc_reset_polynomial: u32,
}

impl AcceleratorConfig {
    fn default_settle_spins() -> u32 {
        defaults::SETTLE_SPINS
    }

    fn default_crc_reset_polynomial() -> u32 {
        defaults::CRC_RESET_POLYNOMIAL
    }
}

impl Default for AcceleratorConfig {
    fn default() -> Self {
        Self {
            settle_spins: defaults::SETTLE_SPINS,
            sqrt_fault_mask: 0,
            crc_fault_mask: 0,
            crc_reset_polynomial: defaults::CRC_RESET_POLYNOMIAL,
        }
    }
}

/// Cycle counter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TimerConfig {
    /// Which counter brackets the trials.
    #[serde(default)]
    pub source: TimerSource,

    /// Notional cycles per second for the host counter.
    #[serde(default = "TimerConfig::default_cycle_rate_hz")]
    pub cycle_rate_hz: u64,

    /// Advance per read for the step counter.
    #[serde(default = "TimerConfig::default_step")]
    pub step: u32,
}

impl TimerConfig {
    fn default_cycle_rate_hz() -> u64 {
        defaults::CYCLE_RATE_HZ
    }

    fn default_step() -> u32 {
        defaults::STEP
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            source: TimerSource::Host,
            cycle_rate_hz: defaults::CYCLE_RATE_HZ,
            step: defaults::STEP,
        }
    }
}
