//! UART console for the target board.
//!
//! Output bytes are stored to the UART data register. The board has no receive
//! path wired to the harness, so operator input is replayed from a script held
//! in memory, with the same end-of-input rules as [`ScriptedConsole`].

use super::{Console, ScriptedConsole};
use crate::config::SystemConfig;

/// Console that transmits through a memory-mapped UART data register.
#[derive(Debug)]
pub struct MmioConsole {
    uart_data: *mut u8,
    input: ScriptedConsole,
}

impl MmioConsole {
    /// Creates a console transmitting to the register at `uart_data`, reading `input`.
    ///
    /// # Safety
    ///
    /// `uart_data` must be mapped and valid for volatile byte writes for the
    /// lifetime of the returned value, and nothing else may alias it.
    pub unsafe fn new(uart_data: usize, input: impl AsRef<[u8]>) -> Self {
        Self {
            uart_data: uart_data as *mut u8,
            input: ScriptedConsole::new(input),
        }
    }

    /// Creates a console from the configured register map.
    ///
    /// # Safety
    ///
    /// Same contract as [`MmioConsole::new`] for `system.uart_data`.
    pub unsafe fn from_config(system: &SystemConfig, input: impl AsRef<[u8]>) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::new(system.uart_data as usize, input) }
    }

    /// Returns the unread part of the input script.
    pub fn remaining(&self) -> &[u8] {
        self.input.remaining()
    }
}

impl Console for MmioConsole {
    #[inline(always)]
    fn emit(&mut self, byte: u8) {
        // SAFETY: the constructor's contract guarantees the register is valid for
        // volatile byte writes.
        unsafe { self.uart_data.write_volatile(byte) }
    }

    fn consume(&mut self) -> Option<u8> {
        self.input.consume()
    }
}
