/// `slp`: decode, validate, inspect and build octet-counted syslog
/// batches (RFC 6587 octet counting around RFC 5424-shaped records).
///
/// # Command overview
///
/// ```text
/// slp <COMMAND> [OPTIONS]
///
/// Commands:
///   parse      Decode a batch and print its records as JSON
///   validate   Check a batch against its declared frame count
///   inspect    Print one line per frame with offsets and decoded priority
///   encode     Build a batch from a JSON manifest of records
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// `FILE` arguments accept `-` for stdin, so a relay body can be piped
/// straight in:
///
/// ```text
/// curl ... | slp parse - --count "$LOGPLEX_MSG_COUNT"
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                       |
/// |------|-----------------------------------------------|
/// | 0    | Success                                       |
/// | 1    | Error (I/O failure, inconsistent batch, etc.) |
///
/// Errors and log output go to stderr so stdout can be piped cleanly.
/// `RUST_LOG` overrides the log filter.
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cmd_encode;
mod cmd_inspect;
mod cmd_parse;
mod cmd_validate;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Octet-counted syslog batch tool.
#[derive(Parser)]
#[command(name = "slp", version, about = "Octet-counted syslog batch decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a batch and print its records as JSON.
    Parse(ParseArgs),
    /// Check a batch against its declared frame count.
    Validate(ValidateArgs),
    /// Print one line per frame with offsets and decoded priority.
    Inspect(InspectArgs),
    /// Build a batch from a JSON manifest of records.
    Encode(EncodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Input options shared by every command that decodes a batch.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// Path to the batch body, or `-` for stdin.
    pub file: PathBuf,

    /// Declared number of frames in the body (e.g. `Logplex-Msg-Count`).
    #[arg(short = 'n', long)]
    pub count: usize,

    /// Reject frames declaring more octets than this.
    #[arg(long)]
    pub max_frame_len: Option<usize>,
}

/// Arguments for `slp parse`.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────────┐
/// │ Flag          │ Values / default                                 │
/// ├───────────────┼──────────────────────────────────────────────────┤
/// │ --format      │ json (default, pretty array) | ndjson            │
/// │ -o / --output │ write to file instead of stdout                  │
/// └───────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Output format: `json` or `ndjson`.
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Write records to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `slp validate`.
///
/// Decodes the batch and reports success checkmarks or a single
/// diagnostic naming the failure kind. Exits 1 on failure.
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub batch: BatchArgs,
}

/// Arguments for `slp inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Include the first 80 characters of each message.
    #[arg(long)]
    pub show_message: bool,

    /// Inspect only the frame at this zero-based index.
    #[arg(long)]
    pub frame: Option<usize>,
}

/// Arguments for `slp encode`.
///
/// The manifest is a JSON object with a `records` array; each record has
/// the seven fields `priority`, `syslog_version`, `timestamp`, `host`,
/// `app_name`, `process_name` and `message`.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON manifest.
    pub input: PathBuf,

    /// Output batch body path.
    #[arg(short, long)]
    pub output: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Parse(args) => cmd_parse::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
