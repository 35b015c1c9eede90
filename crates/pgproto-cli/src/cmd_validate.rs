/// Implementation of `pgproto validate`.
///
/// Attempts a full decode of the capture and reports either a series of
/// success checkmarks (`✓`) or a diagnostic failure line (`✗`). The
/// command exits with code 0 on a valid capture and code 1 on any error
/// (the main dispatcher in `main.rs` converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Framing: 5 frames, no leftover bytes
/// ✓ Tags: all frames carry supported message kinds
/// ✓ Payloads: all payloads decode without error
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unsupported backend message type: CopyInResponse ('G')
/// ```
///
/// A capture that ends mid-frame is reported as a failure — unlike
/// `decode`, which tolerates the cut — because `validate` answers the
/// stricter question "is this a complete, well-formed capture?".
use anyhow::{Result, anyhow};
use pgproto_decoder::MessageDecoder;

use crate::ValidateArgs;

/// Run the `pgproto validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, any frame fails to
/// decode, or the capture ends mid-frame.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = crate::read_capture(&args.file, args.hex)?;

    match MessageDecoder::new().decode(&bytes) {
        Ok(decoded) => {
            if let Some(rest) = &decoded.leftover {
                println!(
                    "✗ Error: capture ends mid-frame ({} byte{} unconsumed)",
                    rest.len(),
                    if rest.len() == 1 { "" } else { "s" }
                );
                return Err(anyhow!("validation failed"));
            }

            println!(
                "✓ Framing: {} frame{}, no leftover bytes",
                decoded.messages.len(),
                if decoded.messages.len() == 1 { "" } else { "s" }
            );
            println!("✓ Tags: all frames carry supported message kinds");
            println!("✓ Payloads: all payloads decode without error");
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {e}");
            Err(anyhow!("validation failed"))
        }
    }
}
