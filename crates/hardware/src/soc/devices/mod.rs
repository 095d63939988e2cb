//! Memory-Mapped Accelerator Devices.
//!
//! This module contains software models of the fixed-function units found on
//! the board: the square-root core and the CRC-32 core.

/// CRC-32 unit.
pub mod crc32;

/// Square-root unit.
pub mod fpsqrt;

pub use crc32::Crc32Unit;
pub use fpsqrt::FpSqrt;

pub use crate::soc::traits::Device;
