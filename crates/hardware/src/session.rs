//! Operator menu session.
//!
//! The interactive loop run on the board's serial console. Each command reads its
//! operands with the parsers, drives the accelerators through the proxy, and
//! prints the result. End-of-input at any prompt ends the session.
//!
//! # Commands
//!
//! * `1`: square root of a decimal operand
//! * `2`: CRC-32 of a hex data word
//! * `3`: program the CRC polynomial from a hex word
//! * `4`: program the CRC polynomial from a list of exponents
//! * `5`: run the full performance audit
//! * `q`: quit

use crate::accel::{AccelRegister, AcceleratorProxy};
use crate::bench::{AuditReport, run_full_audit};
use crate::console::{Console, ConsoleExt};
use crate::parse::{build_polynomial_from_exponents, parse_hex, parse_signed_decimal};
use crate::timer::CycleCounter;

const MENU: &str = "\nMENU:\n [1] FPSQRT\n [2] CRC-32 Calc\n [3] CRC-32 Config (Hex)\n \
                    [4] CRC-32 Config (Builder)\n [5] Run Audit\n [q] Quit\n> ";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Square root of a decimal operand.
    Sqrt,
    /// CRC-32 of a hex data word.
    CrcCalc,
    /// Program the polynomial from hex.
    CrcConfigHex,
    /// Program the polynomial from exponents.
    CrcConfigBuilder,
    /// Full performance audit.
    Audit,
    /// End the session.
    Quit,
}

impl Command {
    /// Decodes a menu key.
    pub const fn from_key(key: u8) -> Option<Self> {
        match key {
            b'1' => Some(Self::Sqrt),
            b'2' => Some(Self::CrcCalc),
            b'3' => Some(Self::CrcConfigHex),
            b'4' => Some(Self::CrcConfigBuilder),
            b'5' => Some(Self::Audit),
            b'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// What happened during a session.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    /// Commands dispatched, including the final `q`.
    pub commands: usize,
    /// Reports of every audit run, in order.
    pub audits: Vec<AuditReport>,
    /// The session ended because input ran out rather than on `q`.
    pub end_of_input: bool,
}

/// Control flow after a command.
enum Flow {
    Continue,
    Quit,
    EndOfInput,
}

/// Runs the menu loop until `q` or end-of-input.
pub fn run_session<A, T, C>(accel: &mut A, timer: &mut T, console: &mut C) -> SessionSummary
where
    A: AcceleratorProxy + ?Sized,
    T: CycleCounter + ?Sized,
    C: Console + ?Sized,
{
    let mut summary = SessionSummary::default();
    let mut show_menu = true;

    loop {
        if show_menu {
            console.print(MENU);
        }
        let Some(key) = console.consume() else {
            summary.end_of_input = true;
            break;
        };
        if matches!(key, b'\n' | b'\r' | b' ') {
            show_menu = false;
            continue;
        }
        show_menu = true;
        console.emit(key);
        console.print("\n");

        let Some(command) = Command::from_key(key) else {
            tracing::debug!(key, "ignoring unknown menu key");
            continue;
        };
        summary.commands += 1;
        tracing::debug!(?command, "dispatching");

        let flow = match command {
            Command::Sqrt => sqrt_command(accel, console),
            Command::CrcCalc => crc_calc_command(accel, console),
            Command::CrcConfigHex => crc_config_hex_command(accel, console),
            Command::CrcConfigBuilder => crc_config_builder_command(accel, console),
            Command::Audit => {
                summary.audits.push(run_full_audit(accel, timer, console));
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
        };

        match flow {
            Flow::Continue => {}
            Flow::Quit => break,
            Flow::EndOfInput => {
                summary.end_of_input = true;
                break;
            }
        }
    }

    console.print("Done.\n");
    summary
}

fn sqrt_command<A, C>(accel: &mut A, console: &mut C) -> Flow
where
    A: AcceleratorProxy + ?Sized,
    C: Console + ?Sized,
{
    console.print("Enter Number: ");
    let Some(n) = parse_signed_decimal(console) else {
        return Flow::EndOfInput;
    };
    // The register is unsigned; negative operands are passed through as their bit pattern.
    accel.write(AccelRegister::Sqrt, n as u32);
    let root = accel.read(AccelRegister::Sqrt);
    console.print("Result: ");
    console.print_dec(root);
    console.print("\n");
    Flow::Continue
}

fn crc_calc_command<A, C>(accel: &mut A, console: &mut C) -> Flow
where
    A: AcceleratorProxy + ?Sized,
    C: Console + ?Sized,
{
    console.print("Enter Data (Hex): ");
    let Some(data) = parse_hex(console) else {
        return Flow::EndOfInput;
    };
    let checksum = accel.crc32(data);
    console.print("Checksum: ");
    console.print_hex(checksum);
    console.print("\n");
    Flow::Continue
}

fn crc_config_hex_command<A, C>(accel: &mut A, console: &mut C) -> Flow
where
    A: AcceleratorProxy + ?Sized,
    C: Console + ?Sized,
{
    console.print("Enter Poly (Hex): ");
    let Some(poly) = parse_hex(console) else {
        return Flow::EndOfInput;
    };
    accel.set_crc_polynomial(poly);
    console.print("Updated.\n");
    Flow::Continue
}

fn crc_config_builder_command<A, C>(accel: &mut A, console: &mut C) -> Flow
where
    A: AcceleratorProxy + ?Sized,
    C: Console + ?Sized,
{
    let poly = build_polynomial_from_exponents(console);
    console.print("Calculated Poly Hex: ");
    console.print_hex(poly.bits());
    console.print("\n");
    accel.set_crc_polynomial(poly.bits());
    console.print("Updated.\n");
    Flow::Continue
}
