//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait implemented by every bus-attached unit. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** 32-bit register read/write at device-relative offsets.
//! 3. **Lifecycle:** Optional `reset` to return the unit to its power-on state.

/// Trait for memory-mapped devices attached to the register bus.
///
/// The accelerators decode 32-bit accesses only; a narrower or misaligned access is
/// the caller's problem and is routed as if it were aligned.
pub trait Device {
    /// Returns a short name for this device (e.g., `"FPSQRT"`, `"CRC32"`).
    fn name(&self) -> &str;
    /// Returns (base_address, size_in_bytes) for this device's MMIO window.
    fn address_range(&self) -> (u64, u64);
    /// Reads the 32-bit register at the given device-relative offset.
    fn read_u32(&mut self, offset: u64) -> u32;
    /// Writes the 32-bit register at the given device-relative offset.
    fn write_u32(&mut self, offset: u64, val: u32);

    /// Returns the device to its power-on state (default: no state to reset).
    fn reset(&mut self) {}
}
