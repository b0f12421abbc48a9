/// Implementation of `slp inspect`.
///
/// Decodes the batch and prints one line per frame. When `--frame N` is
/// given only that frame is shown.
///
/// # Output format
///
/// ```text
/// Batch: 2 frames, 141 bytes
/// Frame 0 @0: 58 bytes  auth.crit  myhost/myapp[1234]  2023-01-01T00:00:00Z
///          Message: "hello world"
/// Frame 1 @61: 77 bytes  local3.info  host/heroku[router]  2012-10-11T03:47:20+00:00
/// ```
use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use slp_decoder::FrameSpan;
use slp_types::Record;

use crate::InspectArgs;
use crate::input::{decoder, display_name, read_batch};

/// Messages longer than this are cut in the `--show-message` line.
const MESSAGE_PREVIEW_CHARS: usize = 80;

/// Run the `slp inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the batch fails to
/// decode, or `--frame` names an index the batch does not have.
pub fn run(args: &InspectArgs) -> Result<()> {
    let batch = read_batch(&args.batch)?;
    let decoded = decoder(&args.batch)
        .decode(&batch)
        .with_context(|| format!("failed to decode {}", display_name(&args.batch.file)))?;

    if let Some(target) = args.frame {
        check_frame_index(target, decoded.len())?;
    }

    println!(
        "Batch: {} frame{}, {} bytes",
        decoded.len(),
        if decoded.len() == 1 { "" } else { "s" },
        batch.body().len()
    );

    for (idx, (span, record)) in decoded.iter().enumerate() {
        if let Some(target) = args.frame
            && idx != target
        {
            continue;
        }

        println!("{}", frame_line(idx, span, record));

        if args.show_message {
            println!("         Message: {:?}", preview(&record.message));
        }
    }

    Ok(())
}

// ── Formatting helpers ────────────────────────────────────────────────────────

fn frame_line(idx: usize, span: &FrameSpan, record: &Record) -> String {
    // A priority the grammar accepted can still be outside 0..=191
    let priority = record
        .priority_value()
        .map_or_else(|_| format!("pri={}", record.priority), |p| p.to_string());

    let mut line = format!(
        "Frame {idx} @{}: {} bytes  {priority}  {}/{}[{}]  {}",
        span.offset, span.content_len, record.host, record.app_name, record.process_name, record.timestamp
    );
    if record.syslog_version != "1" {
        let _ = write!(line, "  (version {})", record.syslog_version);
    }
    line
}

fn check_frame_index(target: usize, frame_count: usize) -> Result<()> {
    match frame_count {
        0 => bail!("--frame {target} is out of range: the batch has no frames"),
        n if target >= n => bail!(
            "--frame {target} is out of range: the batch has {n} frame{}, valid indices are 0..={}",
            if n == 1 { "" } else { "s" },
            n - 1
        ),
        _ => Ok(()),
    }
}

fn preview(message: &str) -> String {
    let mut out: String = message.chars().take(MESSAGE_PREVIEW_CHARS).collect();
    if message.chars().count() > MESSAGE_PREVIEW_CHARS {
        out.push('…');
    }
    out
}
