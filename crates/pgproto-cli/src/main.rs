/// pgproto command-line tool — inspect, decode, and validate captures of
/// server-to-client PostgreSQL backend traffic.
///
/// A capture is a file of raw bytes exactly as the backend sent them (for
/// example, the server side of a proxied connection dumped to disk). With
/// `--hex`, the file may instead be hex text — whitespace is ignored.
///
/// # Command overview
///
/// ```text
/// pgproto <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print a frame-level summary of a capture
///   decode     Decode a capture into typed messages
///   validate   Check a capture for structural correctness
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid capture)    |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The pgproto backend-traffic capture tool.
#[derive(Parser)]
#[command(name = "pgproto", version, about = "PostgreSQL backend protocol capture CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a frame-level summary of each frame in a capture.
    Inspect(InspectArgs),
    /// Decode a capture into typed backend messages.
    Decode(DecodeArgs),
    /// Check a capture for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `pgproto inspect`.
///
/// Splits the capture into frames without decoding payloads, then prints
/// one summary line per frame: index, tag character, message-kind name,
/// and payload size. Useful for eyeballing a capture before decoding.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the capture file.
    pub file: PathBuf,

    /// Treat the file as hex text instead of raw bytes.
    #[arg(long)]
    pub hex: bool,

    /// Show a 16-byte-per-line hex dump of each frame payload.
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `pgproto decode`.
///
/// Runs the full decode pipeline and prints one line per message —
/// human-readable by default, or one JSON object per line with `--json`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the capture file.
    pub file: PathBuf,

    /// Treat the file as hex text instead of raw bytes.
    #[arg(long)]
    pub hex: bool,

    /// Emit one JSON object per message instead of human-readable lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `pgproto validate`.
///
/// Attempts a full decode and reports either success checkmarks or a
/// diagnostic error. Exit code 0 on a valid capture, 1 otherwise.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the capture file.
    pub file: PathBuf,

    /// Treat the file as hex text instead of raw bytes.
    #[arg(long)]
    pub hex: bool,
}

// ── Shared input loading ──────────────────────────────────────────────────────

/// Read a capture file, decoding hex text when `hex` is set.
///
/// Hex input may contain arbitrary whitespace (line breaks, spaces from
/// `xxd -p` style dumps); it is stripped before decoding.
pub(crate) fn read_capture(path: &Path, hex_input: bool) -> Result<Vec<u8>> {
    let raw = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;

    if !hex_input {
        return Ok(raw);
    }

    let text = String::from_utf8(raw)
        .with_context(|| format!("{} is not valid hex text", path.display()))?;
    let compact: String = text.split_whitespace().collect();
    hex::decode(&compact).with_context(|| format!("{} is not valid hex text", path.display()))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
