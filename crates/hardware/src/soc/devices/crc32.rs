//! CRC-32 unit.
//!
//! Models the fixed-function CRC core. The polynomial register configures the
//! generator; writing a data word computes its reflected CRC-32 and latches the
//! checksum, which reads back from the same data register.
//!
//! # Registers
//!
//! * `0x00`: Data (write) / Checksum (read)
//! * `0x04`: Polynomial (read/write)

use crate::common::constants::{CRC_DATA_OFFSET, CRC_POLY_OFFSET};
use crate::reference::Crc32Table;
use crate::soc::devices::Device;

/// CRC-32 unit structure.
#[derive(Debug)]
pub struct Crc32Unit {
    /// Base physical address of the device.
    base_addr: u64,
    /// Size of the decoded window.
    size: u64,
    /// Lookup table for the programmed polynomial.
    table: Crc32Table,
    /// Polynomial restored by `reset`.
    reset_polynomial: u32,
    /// Latched checksum of the last data word.
    result: u32,
    /// XOR mask applied to every checksum (fault injection).
    fault_mask: u32,
}

impl Crc32Unit {
    /// Creates a new CRC unit.
    ///
    /// # Arguments
    ///
    /// * `base_addr` - The base physical address.
    /// * `size` - Size of the decoded window in bytes.
    /// * `reset_polynomial` - Polynomial held out of reset.
    /// * `fault_mask` - Bits to flip in every checksum; zero for a healthy unit.
    pub const fn new(base_addr: u64, size: u64, reset_polynomial: u32, fault_mask: u32) -> Self {
        Self {
            base_addr,
            size,
            table: Crc32Table::new(reset_polynomial),
            reset_polynomial,
            result: 0,
            fault_mask,
        }
    }

    /// Returns the programmed polynomial.
    pub const fn polynomial(&self) -> u32 {
        self.table.polynomial()
    }
}

impl Device for Crc32Unit {
    fn name(&self) -> &str {
        "CRC32"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.size)
    }

    fn read_u32(&mut self, offset: u64) -> u32 {
        match offset {
            CRC_DATA_OFFSET => self.result,
            CRC_POLY_OFFSET => self.polynomial(),
            _ => 0,
        }
    }

    fn write_u32(&mut self, offset: u64, val: u32) {
        match offset {
            CRC_DATA_OFFSET => self.result = self.table.checksum(val) ^ self.fault_mask,
            CRC_POLY_OFFSET => {
                if val != self.polynomial() {
                    self.table = Crc32Table::new(val);
                }
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.table = Crc32Table::new(self.reset_polynomial);
        self.result = 0;
    }
}
