//! Character console transport.
//!
//! The operator talks to the harness one byte at a time. This module provides:
//! 1. **Transport:** The [`Console`] capability (`emit` a byte, `consume` a byte or
//!    end-of-input).
//! 2. **Formatting:** [`ConsoleExt`] helpers for strings, decimal, and hexadecimal.
//! 3. **Implementations:** An in-memory scripted console, a stdio console, and
//!    the board's memory-mapped UART.

/// UART data register console for the target board.
pub mod mmio;

/// In-memory console with scripted input and captured output.
pub mod scripted;

/// Console bound to the process's stdin and stdout.
pub mod stdio;

pub use mmio::MmioConsole;
pub use scripted::ScriptedConsole;
pub use stdio::StdioConsole;

/// Byte-oriented console transport.
pub trait Console {
    /// Sends one byte to the operator.
    fn emit(&mut self, byte: u8);

    /// Takes the next input byte, or `None` once the input is exhausted.
    ///
    /// End-of-input is sticky: after the first `None`, every later call returns `None`.
    fn consume(&mut self) -> Option<u8>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn emit(&mut self, byte: u8) {
        (**self).emit(byte);
    }

    fn consume(&mut self) -> Option<u8> {
        (**self).consume()
    }
}

/// Formatting helpers available on every [`Console`].
pub trait ConsoleExt: Console {
    /// Emits every byte of `text`.
    fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            self.emit(byte);
        }
    }

    /// Emits `value` in decimal.
    fn print_dec(&mut self, value: u32) {
        self.print(&value.to_string());
    }

    /// Emits `value` as `0x` followed by eight upper-case hex digits.
    fn print_hex(&mut self, value: u32) {
        self.print(&format!("{value:#010X}"));
    }
}

impl<C: Console + ?Sized> ConsoleExt for C {}
