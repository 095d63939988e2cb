//! Common utilities and types used throughout the harness.
//!
//! This module provides building blocks shared by every component. It includes:
//! 1. **Constants:** Register map, register offsets, and fixed audit operands.
//! 2. **Error Handling:** Setup errors and the crate-wide `Result` alias.

/// Register map and audit constants.
pub mod constants;

/// Error types for configuration and setup.
pub mod error;

pub use error::{ConfigError, Result};
