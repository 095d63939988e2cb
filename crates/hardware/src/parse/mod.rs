//! Operand parsers.
//!
//! Character-level state machines that turn console input into operands. It provides:
//! 1. **Decimal:** Signed 32-bit decimal integers.
//! 2. **Hexadecimal:** Unsigned 32-bit hex words.
//! 3. **Polynomial builder:** A bit-set assembled from a list of exponents.
//!
//! All parsers echo the characters they accept, skip leading blanks and line
//! breaks, and report end-of-input as `None`. The character that terminates a
//! number is consumed and dropped; it is neither echoed nor available to the
//! next parse.

/// Signed decimal parser.
pub mod decimal;

/// Hexadecimal parser.
pub mod hex;

/// Exponent-list polynomial builder.
pub mod polynomial;

pub use decimal::parse_signed_decimal;
pub use hex::parse_hex;
pub use polynomial::{Polynomial, build_polynomial_from_exponents};

use crate::console::Console;

/// Accumulator state for one number being parsed.
#[derive(Debug, Clone, Copy, Default)]
struct ParseCursor {
    /// Magnitude accumulated so far; bits beyond 32 are dropped.
    value: u32,
    /// A leading `-` was seen.
    negative: bool,
    /// The terminating character has been consumed.
    terminated: bool,
}

impl ParseCursor {
    /// Folds `byte` into the accumulator if it is a digit in `radix`.
    ///
    /// Returns `false` (and marks the cursor terminated) for any other byte.
    fn feed(&mut self, byte: u8, radix: u32) -> bool {
        match char::from(byte).to_digit(radix) {
            Some(digit) => {
                self.value = self.value.wrapping_mul(radix).wrapping_add(digit);
                true
            }
            None => {
                self.terminated = true;
                false
            }
        }
    }

    /// Returns the accumulated magnitude with its sign applied.
    const fn signed(self) -> i32 {
        let magnitude = self.value as i32;
        if self.negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }
}

/// Returns the first byte that is not a blank or line break, or `None` at end-of-input.
fn first_significant<C: Console + ?Sized>(console: &mut C) -> Option<u8> {
    loop {
        let byte = console.consume()?;
        if !matches!(byte, b' ' | b'\n' | b'\r') {
            return Some(byte);
        }
    }
}

/// Consumes and echoes digits in `radix` until a non-digit or end-of-input.
fn accumulate<C: Console + ?Sized>(console: &mut C, cursor: &mut ParseCursor, radix: u32) {
    while !cursor.terminated {
        let Some(byte) = console.consume() else {
            cursor.terminated = true;
            break;
        };
        if cursor.feed(byte, radix) {
            console.emit(byte);
        }
    }
}
