/// Implementation of `pgproto inspect`.
///
/// Splits the capture into frames (no payload decoding) and prints a
/// summary line per frame. A trailing partial frame is reported rather
/// than treated as an error, since captures are often cut mid-stream.
///
/// # Output format
///
/// ```text
/// Frame 0: 'R' Authentication (8 byte payload)
/// Frame 1: 'S' ParameterStatus (25 byte payload)
/// Frame 2: 'Z' ReadyForQuery (1 byte payload)
/// ---
/// 3 frames, no leftover bytes
/// ```
use anyhow::{Context, Result};
use pgproto_types::BackendTag;
use pgproto_wire::frame::DEFAULT_MAX_PAYLOAD;
use pgproto_wire::reassemble;

use crate::InspectArgs;

/// Run the `pgproto inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a frame header is
/// structurally corrupt (invalid or oversized declared length).
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = crate::read_capture(&args.file, args.hex)?;

    let batch = reassemble(&bytes, DEFAULT_MAX_PAYLOAD)
        .with_context(|| format!("failed to split {}", args.file.display()))?;

    for (idx, frame) in batch.frames.iter().enumerate() {
        let kind = match BackendTag::from_byte(frame.tag) {
            Ok(tag) => tag.name(),
            Err(_) => "unknown",
        };
        println!(
            "Frame {idx}: '{}' {kind} ({} byte payload)",
            frame.tag as char,
            frame.payload.len()
        );

        if args.show_hex {
            hex_dump(&frame.payload);
        }
    }

    println!("---");
    match &batch.leftover {
        Some(rest) => println!(
            "{} frame{}, {} leftover byte{} (partial trailing frame)",
            batch.frames.len(),
            if batch.frames.len() == 1 { "" } else { "s" },
            rest.len(),
            if rest.len() == 1 { "" } else { "s" }
        ),
        None => println!(
            "{} frame{}, no leftover bytes",
            batch.frames.len(),
            if batch.frames.len() == 1 { "" } else { "s" }
        ),
    }

    Ok(())
}

/// Print a 16-byte-per-line hex + ASCII dump, indented under the frame line.
fn hex_dump(raw: &[u8]) {
    for (i, chunk) in raw.chunks(16).enumerate() {
        let offset = i * 16;
        let hex: String = chunk
            .iter()
            .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                use std::fmt::Write as _;
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("         {offset:04x}  {hex:<48}  {ascii}");
    }
}
