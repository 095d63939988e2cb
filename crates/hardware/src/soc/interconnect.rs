//! Register bus for MMIO access.
//!
//! This module implements the bus that routes physical addresses to devices. It provides:
//! 1. **Device registration:** Devices are added by address range, checked for
//!    overlap, and kept sorted for lookup.
//! 2. **Access routing:** 32-bit reads and writes by address, with a last-device
//!    hint so repeated accesses to one unit skip the search.

use super::traits::Device;
use crate::common::{ConfigError, Result};

/// Register bus; routes accesses by physical address.
pub struct Bus {
    /// Registered devices, sorted by base address.
    devices: Vec<Box<dyn Device>>,
    last_device_idx: usize,
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.devices.iter().map(|d| (d.name(), d.address_range())))
            .finish()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            last_device_idx: 0,
        }
    }

    /// Registers a device; devices are kept sorted by base address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AddressOverlap`] if the device's window intersects
    /// one already on the bus, or [`ConfigError::InvalidValue`] for an empty window.
    pub fn add_device(&mut self, dev: Box<dyn Device>) -> Result<()> {
        let (base, size) = dev.address_range();
        if size == 0 {
            return Err(ConfigError::invalid("system", "device window must be non-empty"));
        }
        for other in &self.devices {
            let (other_base, other_size) = other.address_range();
            if base < other_base.saturating_add(other_size) && other_base < base.saturating_add(size)
            {
                return Err(ConfigError::AddressOverlap {
                    first: other.name().to_string(),
                    second: dev.name().to_string(),
                    addr: base,
                });
            }
        }

        tracing::debug!("{} attached at {base:#x} (size {size:#x})", dev.name());
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        self.last_device_idx = 0;
        Ok(())
    }

    /// Returns the number of attached devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Returns whether the given physical address is decoded by any device.
    pub fn is_valid_address(&self, paddr: u64) -> bool {
        self.devices.iter().any(|dev| {
            let (start, size) = dev.address_range();
            paddr >= start && paddr - start < size
        })
    }

    /// Resets every attached device.
    pub fn reset(&mut self) {
        for dev in &mut self.devices {
            dev.reset();
        }
    }

    fn find_device(&mut self, paddr: u64) -> Option<(&mut Box<dyn Device>, u64)> {
        if self.last_device_idx < self.devices.len() {
            let (start, size) = self.devices[self.last_device_idx].address_range();
            if paddr >= start && paddr - start < size {
                return Some((&mut self.devices[self.last_device_idx], paddr - start));
            }
        }

        for (i, dev) in self.devices.iter_mut().enumerate() {
            let (start, size) = dev.address_range();
            if paddr >= start && paddr - start < size {
                self.last_device_idx = i;
                return Some((dev, paddr - start));
            }
        }
        None
    }

    /// Reads four bytes at the given physical address; returns 0 if no device claims it.
    pub fn read_u32(&mut self, paddr: u64) -> u32 {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.read_u32(offset)
        } else {
            tracing::warn!("read from unmapped address {paddr:#x}");
            0
        }
    }

    /// Writes four bytes at the given physical address; no-op if unclaimed.
    pub fn write_u32(&mut self, paddr: u64, val: u32) {
        if let Some((dev, offset)) = self.find_device(paddr) {
            dev.write_u32(offset, val);
        } else {
            tracing::warn!("write of {val:#x} to unmapped address {paddr:#x}");
        }
    }
}
