//! Simulated accelerator board.
//!
//! Hosts without the real accelerators run against this model instead: a
//! register bus, the square-root and CRC-32 device models, and the builder that
//! wires them up behind the accelerator proxy.

/// Board assembly from configuration.
pub mod builder;

/// Square-root and CRC-32 device models.
pub mod devices;

/// Address decoding and register routing.
pub mod interconnect;

/// The MMIO `Device` trait.
pub mod traits;

pub use builder::System;
