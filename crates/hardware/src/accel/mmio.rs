//! Memory-mapped accelerator registers.
//!
//! On the target board the units sit at fixed physical addresses and compute as
//! soon as the operand register is written. Every access is volatile so the
//! compiler neither elides nor reorders it.

use super::{AccelRegister, AcceleratorProxy};
use crate::common::constants::{CRC_DATA_OFFSET, CRC_POLY_OFFSET};
use crate::config::SystemConfig;

/// Proxy over the physical accelerator registers.
#[derive(Debug)]
pub struct MmioAccelerator {
    sqrt: *mut u32,
    crc_data: *mut u32,
    crc_poly: *mut u32,
}

impl MmioAccelerator {
    /// Creates a proxy for units at `sqrt_base` and `crc_base`.
    ///
    /// # Safety
    ///
    /// Both base addresses must be 4-byte aligned, mapped, and valid for volatile
    /// 32-bit reads and writes at offsets `0` (square root) and `0` and `4` (CRC)
    /// for the lifetime of the returned value, and nothing else may alias them.
    pub const unsafe fn new(sqrt_base: usize, crc_base: usize) -> Self {
        Self {
            sqrt: sqrt_base as *mut u32,
            crc_data: (crc_base + CRC_DATA_OFFSET as usize) as *mut u32,
            crc_poly: (crc_base + CRC_POLY_OFFSET as usize) as *mut u32,
        }
    }

    /// Creates a proxy from the configured register map.
    ///
    /// # Safety
    ///
    /// Same contract as [`MmioAccelerator::new`] for `system.sqrt_base` and
    /// `system.crc_base`.
    pub const unsafe fn from_config(system: &SystemConfig) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::new(system.sqrt_base as usize, system.crc_base as usize) }
    }

    const fn register(&self, reg: AccelRegister) -> *mut u32 {
        match reg {
            AccelRegister::Sqrt => self.sqrt,
            AccelRegister::CrcData => self.crc_data,
            AccelRegister::CrcPoly => self.crc_poly,
        }
    }
}

impl AcceleratorProxy for MmioAccelerator {
    #[inline(always)]
    fn write(&mut self, reg: AccelRegister, value: u32) {
        // SAFETY: the constructor's contract guarantees the register is valid for
        // aligned volatile writes.
        unsafe { self.register(reg).write_volatile(value) }
    }

    #[inline(always)]
    fn read(&mut self, reg: AccelRegister) -> u32 {
        // SAFETY: the constructor's contract guarantees the register is valid for
        // aligned volatile reads.
        unsafe { self.register(reg).read_volatile() }
    }
}
