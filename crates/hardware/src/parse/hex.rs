//! Hexadecimal parser.

use super::{ParseCursor, accumulate, first_significant};
use crate::console::Console;

/// Parses an unsigned hexadecimal word from `console`.
///
/// Digits `0-9`, `A-F` and `a-f` are accepted; there is no `0x` prefix. The first
/// significant character is always echoed and seeds the value when it is a hex
/// digit. If it is not, the value starts at zero and scanning carries on, so a
/// stray leading character is tolerated. Accumulation stops at the first non-hex
/// character, which is dropped; nibbles shifted past bit 31 are lost. A newline is
/// emitted once the word is complete.
///
/// # Returns
///
/// `None` if the input ends before a significant character, otherwise the value.
pub fn parse_hex<C: Console + ?Sized>(console: &mut C) -> Option<u32> {
    let first = first_significant(console)?;
    console.emit(first);

    let mut cursor = ParseCursor::default();
    if let Some(digit) = char::from(first).to_digit(16) {
        cursor.value = digit;
    }

    accumulate(console, &mut cursor, 16);
    console.emit(b'\n');
    Some(cursor.value)
}
