//! Signed decimal parser.

use super::{ParseCursor, accumulate, first_significant};
use crate::console::Console;

/// Parses a signed decimal integer from `console`.
///
/// Leading blanks and line breaks are skipped. The first significant character is
/// echoed and then:
/// - `-` makes the result negative;
/// - a digit seeds the value;
/// - anything else yields `Some(0)` straight away, with no trailing newline.
///
/// Digits are then accumulated (wrapping on overflow) and echoed until the first
/// non-digit, which is dropped. A newline is emitted once the number is complete.
///
/// # Returns
///
/// `None` if the input ends before a significant character, otherwise the value.
/// A lone `-` parses as zero.
pub fn parse_signed_decimal<C: Console + ?Sized>(console: &mut C) -> Option<i32> {
    let first = first_significant(console)?;
    console.emit(first);

    let mut cursor = ParseCursor::default();
    match first {
        b'-' => cursor.negative = true,
        b'0'..=b'9' => {
            let _ = cursor.feed(first, 10);
        }
        _ => return Some(0),
    }

    accumulate(console, &mut cursor, 10);
    console.emit(b'\n');
    Some(cursor.signed())
}
