/// Implementation of `slp encode`.
///
/// Reads a JSON manifest of records and writes them as one octet-counted
/// batch body. The frame count to declare with the body is printed on
/// success.
///
/// # Manifest format
///
/// ```json
/// {
///   "records": [
///     {
///       "priority": "34",
///       "syslog_version": "1",
///       "timestamp": "2023-01-01T00:00:00Z",
///       "host": "myhost",
///       "app_name": "myapp",
///       "process_name": "1234",
///       "message": "hello world"
///     }
///   ]
/// }
/// ```
use std::fs;

use anyhow::{Context, Result};
use slp_encoder::BatchEncoder;
use slp_types::Record;

use crate::EncodeArgs;

#[derive(serde::Deserialize)]
struct Manifest {
    records: Vec<Record>,
}

/// Run the `slp encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, a record
/// has a field the decoder could not read back, or the output cannot be
/// written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let manifest_src = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let manifest: Manifest = serde_json::from_str(&manifest_src)
        .with_context(|| format!("failed to parse manifest {}", args.input.display()))?;

    let mut encoder = BatchEncoder::new();
    for record in &manifest.records {
        encoder.add_record(record);
    }

    let batch = encoder.encode().context("BatchEncoder::encode failed")?;

    fs::write(&args.output, batch.body.as_bytes())
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    println!(
        "Wrote {} frame{} ({} bytes) to {}",
        batch.count,
        if batch.count == 1 { "" } else { "s" },
        batch.body.len(),
        args.output.display()
    );
    Ok(())
}
