//! Scripted console.
//!
//! Replays a fixed input script and records everything the harness writes. The
//! read position is owned by the console value, so independent sessions never
//! share a cursor.

use super::Console;

/// Console fed from an in-memory script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: Vec<u8>,
    cursor: usize,
    output: Vec<u8>,
}

impl ScriptedConsole {
    /// Creates a console that will replay `input`.
    ///
    /// A NUL byte ends the script early, as on the serial line.
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            input: input.as_ref().to_vec(),
            cursor: 0,
            output: Vec::new(),
        }
    }

    /// Returns the bytes emitted so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Returns the emitted bytes as text (lossy for non-UTF-8 output).
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Discards captured output.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Returns the number of input bytes consumed.
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the unread part of the script.
    pub fn remaining(&self) -> &[u8] {
        &self.input[self.cursor.min(self.input.len())..]
    }
}

impl Console for ScriptedConsole {
    fn emit(&mut self, byte: u8) {
        self.output.push(byte);
    }

    fn consume(&mut self) -> Option<u8> {
        let byte = *self.input.get(self.cursor)?;
        if byte == 0 {
            return None;
        }
        self.cursor += 1;
        Some(byte)
    }
}
