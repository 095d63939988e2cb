//! Error definitions.
//!
//! The measurement path itself is infallible: malformed operator input degrades to
//! zero, end-of-input is an `Option`, and a hardware/software mismatch is a reported
//! outcome rather than an error. The only failures are in setting the harness up,
//! which are described by [`ConfigError`].

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for harness setup operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the harness cannot run with.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Two devices decode overlapping address windows.
    #[error("{first} window overlaps {second} window at {addr:#x}")]
    AddressOverlap {
        /// Device registered first.
        first: String,
        /// Device whose window collides.
        second: String,
        /// Base address of the colliding window.
        addr: u64,
    },

    /// The requested cycle counter is not available on this target.
    #[error("cycle counter `{0}` is not available on this target")]
    UnsupportedTimer(&'static str),
}

impl ConfigError {
    /// Creates an invalid value error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
