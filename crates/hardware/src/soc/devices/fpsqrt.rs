//! Square-root unit (FPSQRT).
//!
//! Models the fixed-function square-root core. A single register doubles as the
//! operand input and the result output: writing a radicand starts the computation
//! and the next read returns the floor square root.
//!
//! The model computes the root the way the hardware datapath does, two radicand
//! bits per step (restoring digit recurrence), so it is an implementation
//! independent of the software binary search it is audited against.
//!
//! # Registers
//!
//! * `0x00`: Operand (write) / Result (read)

use crate::soc::devices::Device;

/// Offset of the operand/result register.
const REG_DATA: u64 = 0x00;

/// Square-root unit structure.
#[derive(Debug)]
pub struct FpSqrt {
    /// Base physical address of the device.
    base_addr: u64,
    /// Size of the decoded window.
    size: u64,
    /// Latched result of the last computation.
    result: u32,
    /// XOR mask applied to every result (fault injection).
    fault_mask: u32,
}

impl FpSqrt {
    /// Creates a new square-root unit.
    ///
    /// # Arguments
    ///
    /// * `base_addr` - The base physical address.
    /// * `size` - Size of the decoded window in bytes.
    /// * `fault_mask` - Bits to flip in every result; zero for a healthy unit.
    pub const fn new(base_addr: u64, size: u64, fault_mask: u32) -> Self {
        Self {
            base_addr,
            size,
            result: 0,
            fault_mask,
        }
    }

    /// Digit-recurrence integer square root: two radicand bits per iteration.
    const fn compute(radicand: u32) -> u32 {
        let mut rem = radicand;
        let mut root = 0u32;
        let mut bit = 1u32 << 30;
        while bit > rem {
            bit >>= 2;
        }
        while bit != 0 {
            if rem >= root + bit {
                rem -= root + bit;
                root = (root >> 1) + bit;
            } else {
                root >>= 1;
            }
            bit >>= 2;
        }
        root
    }
}

impl Device for FpSqrt {
    fn name(&self) -> &str {
        "FPSQRT"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.size)
    }

    /// Reads the latched result; other offsets read as zero.
    fn read_u32(&mut self, offset: u64) -> u32 {
        match offset {
            REG_DATA => self.result,
            _ => 0,
        }
    }

    /// Writing the data register computes and latches the root.
    fn write_u32(&mut self, offset: u64, val: u32) {
        if offset == REG_DATA {
            self.result = Self::compute(val) ^ self.fault_mask;
        }
    }

    fn reset(&mut self) {
        self.result = 0;
    }
}
