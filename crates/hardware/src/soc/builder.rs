//! System-on-Chip construction and top-level `System` type.
//!
//! This module builds the simulated board from configuration. It performs:
//! 1. **Bus setup:** Creates the register bus.
//! 2. **Device registration:** Instantiates the square-root and CRC-32 units at
//!    their configured base addresses.
//! 3. **Proxy access:** Implements [`AcceleratorProxy`] by routing logical
//!    registers to physical addresses, with an optional settle delay per write.

use std::hint;

use crate::accel::{AccelRegister, AcceleratorProxy};
use crate::common::{ConfigError, Result};
use crate::common::constants::{ACCEL_WINDOW_SIZE, CRC_DATA_OFFSET, CRC_POLY_OFFSET};
use crate::config::Config;
use crate::soc::devices::{Crc32Unit, FpSqrt};
use crate::soc::interconnect::Bus;

/// Simulated board: the register bus plus the register map used to reach it.
#[derive(Debug)]
pub struct System {
    /// Register bus hosting the accelerator models.
    pub bus: Bus,
    /// Busy-wait iterations after every register write.
    pub settle_spins: u32,
    sqrt_addr: u64,
    crc_data_addr: u64,
    crc_poly_addr: u64,
}

impl System {
    /// Builds a system from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a device window would wrap the
    /// address space, or an overlap error if the windows collide.
    pub fn new(config: &Config) -> Result<Self> {
        let mut bus = Bus::new();
        let system = &config.system;
        let accel = &config.accelerator;

        let sqrt_end = system.sqrt_base.checked_add(ACCEL_WINDOW_SIZE);
        let crc_end = system.crc_base.checked_add(ACCEL_WINDOW_SIZE);
        if sqrt_end.is_none() {
            return Err(ConfigError::invalid(
                "system.sqrt_base",
                "register window runs past the end of the address space",
            ));
        }
        if crc_end.is_none() {
            return Err(ConfigError::invalid(
                "system.crc_base",
                "register window runs past the end of the address space",
            ));
        }

        bus.add_device(Box::new(FpSqrt::new(
            system.sqrt_base,
            ACCEL_WINDOW_SIZE,
            accel.sqrt_fault_mask,
        )))?;
        bus.add_device(Box::new(Crc32Unit::new(
            system.crc_base,
            ACCEL_WINDOW_SIZE,
            accel.crc_reset_polynomial,
            accel.crc_fault_mask,
        )))?;

        if accel.sqrt_fault_mask != 0 || accel.crc_fault_mask != 0 {
            tracing::warn!(
                "fault injection enabled (sqrt mask {:#x}, crc mask {:#x})",
                accel.sqrt_fault_mask,
                accel.crc_fault_mask
            );
        }

        Ok(Self {
            bus,
            settle_spins: accel.settle_spins,
            sqrt_addr: system.sqrt_base,
            // In range: the whole window fits below `crc_end`.
            crc_data_addr: system.crc_base + CRC_DATA_OFFSET,
            crc_poly_addr: system.crc_base + CRC_POLY_OFFSET,
        })
    }

    /// Returns the physical address backing `reg`.
    pub const fn address_of(&self, reg: AccelRegister) -> u64 {
        match reg {
            AccelRegister::Sqrt => self.sqrt_addr,
            AccelRegister::CrcData => self.crc_data_addr,
            AccelRegister::CrcPoly => self.crc_poly_addr,
        }
    }

    /// Returns every device to its power-on state.
    pub fn reset(&mut self) {
        self.bus.reset();
    }

    #[inline(always)]
    fn settle(&self) {
        for _ in 0..self.settle_spins {
            hint::spin_loop();
        }
    }
}

impl AcceleratorProxy for System {
    #[inline(always)]
    fn write(&mut self, reg: AccelRegister, value: u32) {
        self.bus.write_u32(self.address_of(reg), value);
        self.settle();
    }

    #[inline(always)]
    fn read(&mut self, reg: AccelRegister) -> u32 {
        self.bus.read_u32(self.address_of(reg))
    }
}
