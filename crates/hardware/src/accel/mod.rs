//! Accelerator proxy capability.
//!
//! The benchmark engine never touches registers directly. It drives the two
//! accelerators through [`AcceleratorProxy`], which is implemented by:
//! 1. **Simulated SoC:** [`System`](crate::soc::System), a register bus hosting
//!    software models of both units.
//! 2. **Real hardware:** [`MmioAccelerator`], volatile access to the physical registers.
//!
//! Writing an operand register starts the computation and a read that follows
//! observes the finished result. If a unit needs settling or ready polling, the
//! proxy does it inside `write` or `read` so that a timing bracket around the
//! pair still measures the true latency.

/// Volatile register access for real hardware.
pub mod mmio;

pub use mmio::MmioAccelerator;

use serde::Serialize;

/// Logical accelerator registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccelRegister {
    /// Square-root unit: write the radicand, read the root.
    Sqrt,
    /// CRC unit data register: write a data word, read its checksum.
    CrcData,
    /// CRC unit polynomial configuration register.
    CrcPoly,
}

impl AccelRegister {
    /// All registers, in address order.
    pub const ALL: [Self; 3] = [Self::Sqrt, Self::CrcData, Self::CrcPoly];

    /// Returns a short register name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "FPSQRT",
            Self::CrcData => "CRC_DATA",
            Self::CrcPoly => "CRC_POLY",
        }
    }
}

/// Write-operand / read-result access to the accelerators.
pub trait AcceleratorProxy {
    /// Writes `value` to `reg`.
    fn write(&mut self, reg: AccelRegister, value: u32);

    /// Reads `reg`.
    fn read(&mut self, reg: AccelRegister) -> u32;

    /// Computes the integer square root of `n` on the accelerator.
    fn sqrt(&mut self, n: u32) -> u32 {
        self.write(AccelRegister::Sqrt, n);
        self.read(AccelRegister::Sqrt)
    }

    /// Computes the CRC-32 of `data` with the currently programmed polynomial.
    fn crc32(&mut self, data: u32) -> u32 {
        self.write(AccelRegister::CrcData, data);
        self.read(AccelRegister::CrcData)
    }

    /// Programs the CRC polynomial.
    fn set_crc_polynomial(&mut self, polynomial: u32) {
        self.write(AccelRegister::CrcPoly, polynomial);
    }
}

impl<A: AcceleratorProxy + ?Sized> AcceleratorProxy for &mut A {
    fn write(&mut self, reg: AccelRegister, value: u32) {
        (**self).write(reg, value);
    }

    fn read(&mut self, reg: AccelRegister) -> u32 {
        (**self).read(reg)
    }
}

impl<A: AcceleratorProxy + ?Sized> AcceleratorProxy for Box<A> {
    fn write(&mut self, reg: AccelRegister, value: u32) {
        (**self).write(reg, value);
    }

    fn read(&mut self, reg: AccelRegister) -> u32 {
        (**self).read(reg)
    }
}
