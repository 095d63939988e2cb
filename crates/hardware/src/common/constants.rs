//! Global Harness Constants.
//!
//! This module defines constants shared across the harness. It includes:
//! 1. **Register Map:** Default physical addresses of the console and accelerator registers.
//! 2. **Register Layout:** Offsets of the CRC unit's data and polynomial registers.
//! 3. **Audit Inputs:** The fixed operands used by the full performance audit.

/// Default physical address of the UART data register.
pub const UART_DATA_ADDR: u64 = 0x2000_0000;

/// Default physical address of the square-root unit's operand/result register.
pub const SQRT_BASE: u64 = 0x4000_0000;

/// Default physical base address of the CRC-32 unit.
pub const CRC_BASE: u64 = 0x6000_0000;

/// Offset of the CRC data register (write operand, read checksum).
pub const CRC_DATA_OFFSET: u64 = 0x0;

/// Offset of the CRC polynomial configuration register.
pub const CRC_POLY_OFFSET: u64 = 0x4;

/// Size of the MMIO window decoded by each accelerator.
pub const ACCEL_WINDOW_SIZE: u64 = 0x1000;

/// Reflected IEEE 802.3 CRC-32 polynomial.
pub const CRC32_IEEE_REFLECTED: u32 = 0xEDB8_8320;

/// Operand of the square-root audit trial.
pub const SQRT_AUDIT_INPUT: u32 = 123_456;

/// Data word of the CRC-32 audit trial.
pub const CRC_AUDIT_INPUT: u32 = 0xDEAD_BEEF;

/// Polynomial programmed before the CRC-32 audit trial.
pub const CRC_AUDIT_POLYNOMIAL: u32 = CRC32_IEEE_REFLECTED;

/// Highest exponent representable in a 32-bit polynomial.
pub const MAX_POLY_EXPONENT: i32 = 31;

/// Exponent value that finishes the polynomial builder.
pub const POLY_FINISH_EXPONENT: i32 = -1;
