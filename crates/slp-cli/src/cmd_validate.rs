/// Implementation of `slp validate`.
///
/// Decodes the batch and reports either success checkmarks (`✓`) or one
/// diagnostic line (`✗`) naming the failure kind. Exit code 0 on a
/// consistent batch, 1 otherwise (the dispatcher in `main.rs` converts
/// `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Frames: 3 frames parsed
/// ✓ Count: declared count 3 matches body
/// ✓ Coverage: 412 of 412 bytes accounted for
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ OverflowError: message count 2 is inconsistent with body, overflowed body after 1 frame(s)
/// ```
use anyhow::{Result, anyhow};
use slp_decoder::DecodeError;

use crate::ValidateArgs;
use crate::input::{decoder, read_batch};

/// Run the `slp validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the batch fails to
/// decode.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let batch = read_batch(&args.batch)?;

    match decoder(&args.batch).decode(&batch) {
        Ok(decoded) => {
            println!(
                "✓ Frames: {} frame{} parsed",
                decoded.len(),
                if decoded.len() == 1 { "" } else { "s" }
            );
            println!(
                "✓ Count: declared count {} matches body",
                batch.expected_count()
            );
            println!(
                "✓ Coverage: {} of {} bytes accounted for",
                decoded.consumed(),
                batch.body().len()
            );
            Ok(())
        }

        Err(e) => {
            println!("✗ {}", diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

/// `<Kind>: <message>` for one decode error.
fn diagnostic(e: &DecodeError) -> String {
    format!("{}: {e}", e.kind())
}
