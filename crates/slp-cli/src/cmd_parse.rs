/// Implementation of `slp parse`.
///
/// Decodes the batch and writes its records as JSON. Records are emitted
/// only when the whole batch is consistent; any failure prints nothing
/// to the output and exits 1.
///
/// # Output formats
///
/// ```text
/// ┌────────┬───────────────────────────────────────────────────────────┐
/// │ Format │ Shape                                                     │
/// ├────────┼───────────────────────────────────────────────────────────┤
/// │ json   │ [ { "priority": "34", ..., "message": "..." }, ... ]      │
/// │ ndjson │ one record object per line                                │
/// └────────┴───────────────────────────────────────────────────────────┘
/// ```
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result, anyhow};
use slp_types::Record;

use crate::ParseArgs;
use crate::input::{decoder, display_name, read_batch};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Ndjson,
}

/// Run the `slp parse` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the format is
/// unrecognised, the batch fails to decode, or the output cannot be
/// written.
pub fn run(args: &ParseArgs) -> Result<()> {
    let format = parse_format(&args.format)?;
    let batch = read_batch(&args.batch)?;

    let decoded = decoder(&args.batch)
        .decode(&batch)
        .with_context(|| format!("failed to decode {}", display_name(&args.batch.file)))?;

    let rendered = render(&decoded.records, format)?;

    if let Some(path) = &args.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(rendered.as_bytes())
            .context("cannot write to stdout")?;
    }

    Ok(())
}

/// Serialise records in the requested format. Output always ends with a
/// newline (an empty batch in ndjson is the empty string).
fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(records).context("cannot serialise records")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Ndjson => records.iter().try_fold(String::new(), |mut out, record| {
            out.push_str(&serde_json::to_string(record).context("cannot serialise record")?);
            out.push('\n');
            Ok(out)
        }),
    }
}

/// Parses the `--format` string.
///
/// # Errors
///
/// Returns an error for unrecognised format names.
fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "ndjson" | "jsonl" => Ok(OutputFormat::Ndjson),
        _ => Err(anyhow!("unknown format {s:?}, expected json|ndjson")),
    }
}
