/// Shared input handling: reading a batch body from a file or stdin and
/// building the decoder the batch flags ask for.
use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

use anyhow::{Context, Result};
use slp_decoder::{Batch, BatchDecoder, DecoderConfig};

use crate::BatchArgs;

/// Read the batch named by `args` into memory.
///
/// # Errors
///
/// Returns an error if the file (or stdin) cannot be read or is not
/// valid UTF-8.
pub fn read_batch(args: &BatchArgs) -> Result<Batch> {
    let body = read_body(&args.file)?;
    tracing::debug!(
        file = %display_name(&args.file),
        count = args.count,
        body_len = body.len(),
        "batch read"
    );
    Ok(Batch::new(args.count, body))
}

/// A decoder honouring `--max-frame-len`.
pub fn decoder(args: &BatchArgs) -> BatchDecoder {
    let config = match args.max_frame_len {
        Some(limit) => DecoderConfig::default().with_max_frame_len(limit),
        None => DecoderConfig::default(),
    };
    BatchDecoder::with_config(config)
}

/// Human-readable name for diagnostics.
pub fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_body(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("cannot read batch from stdin")?;
        return Ok(body);
    }

    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
