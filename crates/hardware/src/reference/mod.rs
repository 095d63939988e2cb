//! Software reference algorithms.
//!
//! Pure, deterministic implementations of the functions the accelerators compute.
//! They serve as the correctness oracle and the performance baseline for every
//! trial. It provides:
//! 1. **Square Root:** Floor integer square root by binary search.
//! 2. **CRC-32:** Bitwise reflected CRC over a single 32-bit word, plus a
//!    table-driven equivalent.

/// Reflected CRC-32 over one data word.
pub mod crc32;

/// Integer square root.
pub mod sqrt;

pub use crc32::{Crc32Table, software_crc32};
pub use sqrt::software_isqrt;
