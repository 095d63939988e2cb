//! Polynomial builder.
//!
//! Lets the operator describe a CRC generator as the list of exponents with a
//! non-zero coefficient instead of typing the hex word.

use std::fmt;

use serde::Serialize;

use super::parse_signed_decimal;
use crate::common::constants::{MAX_POLY_EXPONENT, POLY_FINISH_EXPONENT};
use crate::console::{Console, ConsoleExt};

/// A polynomial over GF(2) of degree at most 31.
///
/// Bit `i` set means the coefficient of `x^i` is one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Polynomial(u32);

impl Polynomial {
    /// The zero polynomial.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw bit-set.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bit-set.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Sets the coefficient of `x^exponent`.
    ///
    /// Exponents outside `[0, 31]` are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the term was in range (whether or not it was already set).
    pub const fn add_term(&mut self, exponent: i32) -> bool {
        if exponent < 0 || exponent > MAX_POLY_EXPONENT {
            return false;
        }
        self.0 |= 1 << exponent;
        true
    }

    /// Returns whether the coefficient of `x^exponent` is one.
    pub const fn has_term(self, exponent: u32) -> bool {
        exponent <= MAX_POLY_EXPONENT as u32 && self.0 & (1 << exponent) != 0
    }

    /// Iterates the exponents with a non-zero coefficient, highest first.
    pub fn exponents(self) -> impl Iterator<Item = u32> {
        (0..=MAX_POLY_EXPONENT as u32)
            .rev()
            .filter(move |&e| self.has_term(e))
    }
}

impl From<Polynomial> for u32 {
    fn from(poly: Polynomial) -> Self {
        poly.0
    }
}

impl fmt::Display for Polynomial {
    /// Formats as a sum of terms, e.g. `x^15 + x^3 + 1`; the zero polynomial is `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "0");
        }
        for (i, exponent) in self.exponents().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match exponent {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                e => write!(f, "x^{e}")?,
            }
        }
        Ok(())
    }
}

/// Builds a polynomial from exponents typed at the console.
///
/// Prompts for one exponent at a time. `-1` or end-of-input finishes the list. An
/// exponent in `[0, 31]` sets that term and is acknowledged; anything else is
/// ignored without comment.
pub fn build_polynomial_from_exponents<C: Console + ?Sized>(console: &mut C) -> Polynomial {
    let mut poly = Polynomial::ZERO;
    console.print(">> Enter exponents (type -1 to Finish).\n");
    loop {
        console.print("   Expt > ");
        let exponent = match parse_signed_decimal(console) {
            None | Some(POLY_FINISH_EXPONENT) => break,
            Some(exponent) => exponent,
        };

        if poly.add_term(exponent) {
            console.print("   (Added x^");
            console.print_dec(exponent as u32);
            console.print(")\n");
        }
    }
    tracing::debug!(poly = %poly, bits = poly.bits(), "polynomial built");
    poly
}
