//! Stdio console.
//!
//! Reads operator input from stdin and writes to stdout. Output is flushed at
//! every newline and before each read so prompts appear before the operator types.

use std::io::{self, BufWriter, Read, Stdin, Stdout, Write};

use super::Console;

/// Console bound to the process's standard streams.
#[derive(Debug)]
pub struct StdioConsole {
    stdin: Stdin,
    stdout: BufWriter<Stdout>,
    eof: bool,
}

impl StdioConsole {
    /// Creates a console over stdin and stdout.
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: BufWriter::new(io::stdout()),
            eof: false,
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.stdout.flush() {
            tracing::warn!(error = %e, "stdout flush failed");
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn emit(&mut self, byte: u8) {
        if let Err(e) = self.stdout.write_all(&[byte]) {
            tracing::warn!(error = %e, "stdout write failed");
            return;
        }
        if byte == b'\n' {
            self.flush();
        }
    }

    fn consume(&mut self) -> Option<u8> {
        if self.eof {
            return None;
        }
        self.flush();

        let mut buf = [0u8; 1];
        match self.stdin.lock().read(&mut buf) {
            Ok(1) if buf[0] != 0 => Some(buf[0]),
            Ok(_) => {
                self.eof = true;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                self.eof = true;
                None
            }
        }
    }
}

impl Drop for StdioConsole {
    fn drop(&mut self) {
        self.flush();
    }
}
