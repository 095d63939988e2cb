//! Accelerator audit harness CLI.
//!
//! This binary drives the simulated accelerator board. It provides:
//! 1. **Audit:** Run the fixed square-root and CRC-32 audit once and print the report.
//! 2. **Menu:** Run the interactive operator menu on stdin, or on a scripted input.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hdlbench_core::config::{Config, TimerSource};
use hdlbench_core::console::{ScriptedConsole, StdioConsole};
use hdlbench_core::session::run_session;
use hdlbench_core::{System, run_full_audit, timer};

#[derive(Parser, Debug)]
#[command(
    name = "hdlbench",
    author,
    version,
    about = "Accelerator-versus-software audit harness",
    long_about = "Compare the square-root and CRC-32 accelerators against their software references.\n\nExamples:\n  hdlbench audit\n  hdlbench audit --json --timer step\n  hdlbench audit --fault sqrt\n  hdlbench menu --script '5\\n1\\n144\\nq'"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full performance audit once.
    Audit {
        /// Print the report as JSON instead of the console rendering.
        #[arg(long)]
        json: bool,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Corrupt one accelerator's results to exercise the mismatch path.
        #[arg(long, value_enum)]
        fault: Option<Fault>,

        /// Cycle counter used for the timing brackets.
        #[arg(long, value_enum)]
        timer: Option<TimerChoice>,
    },

    /// Run the operator menu.
    Menu {
        /// Input to feed the menu instead of stdin; `\n` escapes are expanded.
        #[arg(short, long)]
        script: Option<String>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Fault {
    Sqrt,
    Crc,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TimerChoice {
    Host,
    Step,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Audit {
            json,
            config,
            fault,
            timer,
        } => cmd_audit(json, config, fault, timer),
        Commands::Menu { script, config } => cmd_menu(script, config),
    };
    process::exit(code);
}

/// Installs the stderr log subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file if one was given, otherwise the defaults.
fn load_config(path: Option<PathBuf>) -> Option<Config> {
    match path {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::error!("failed to load {}: {e}", path.display());
                None
            }
        },
        None => Some(Config::default()),
    }
}

/// Runs the audit and returns the process exit code (1 if any trial mismatched).
fn cmd_audit(
    json: bool,
    config: Option<PathBuf>,
    fault: Option<Fault>,
    timer_choice: Option<TimerChoice>,
) -> i32 {
    let Some(mut config) = load_config(config) else {
        return 2;
    };
    match fault {
        Some(Fault::Sqrt) if config.accelerator.sqrt_fault_mask == 0 => {
            config.accelerator.sqrt_fault_mask = 1;
        }
        Some(Fault::Crc) if config.accelerator.crc_fault_mask == 0 => {
            config.accelerator.crc_fault_mask = 1;
        }
        _ => {}
    }
    match timer_choice {
        Some(TimerChoice::Host) => config.timer.source = TimerSource::Host,
        Some(TimerChoice::Step) => config.timer.source = TimerSource::Step,
        None => {}
    }

    let (mut system, mut counter) = match build(&config) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("{e}");
            return 2;
        }
    };

    let report = if json {
        let mut sink = ScriptedConsole::new(b"");
        let report = run_full_audit(&mut system, &mut counter, &mut sink);
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                tracing::error!("failed to serialize report: {e}");
                return 2;
            }
        }
        report
    } else {
        let mut console = StdioConsole::new();
        run_full_audit(&mut system, &mut counter, &mut console)
    };

    i32::from(!report.all_matched())
}

/// Runs the operator menu and returns the process exit code.
fn cmd_menu(script: Option<String>, config: Option<PathBuf>) -> i32 {
    let Some(config) = load_config(config) else {
        return 2;
    };
    let (mut system, mut counter) = match build(&config) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("{e}");
            return 2;
        }
    };

    let summary = match script {
        Some(script) => {
            let mut console = ScriptedConsole::new(unescape(&script));
            let summary = run_session(&mut system, &mut counter, &mut console);
            print!("{}", console.output_text());
            summary
        }
        None => {
            let mut console = StdioConsole::new();
            run_session(&mut system, &mut counter, &mut console)
        }
    };
    tracing::debug!(
        commands = summary.commands,
        audits = summary.audits.len(),
        end_of_input = summary.end_of_input,
        "session finished"
    );
    0
}

fn build(config: &Config) -> hdlbench_core::common::Result<(System, Box<dyn timer::CycleCounter>)> {
    let system = System::new(config)?;
    let counter = timer::from_config(&config.timer)?;
    Ok((system, counter))
}

/// Expands `\n`, `\r`, `\t` and `\\` so scripts can be passed as a single argument.
fn unescape(script: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(script.len());
    let mut bytes = script.bytes();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b'n') => out.push(b'\n'),
            Some(b'r') => out.push(b'\r'),
            Some(b't') => out.push(b'\t'),
            Some(other) => out.push(other),
            None => out.push(b'\\'),
        }
    }
    out
}
