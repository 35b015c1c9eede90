use crate::error::WireError;

/// Frame header size: tag (1) + declared length (4) = 5 bytes.
pub const HEADER_LEN: usize = 5;

/// Smallest legal declared length — the 4 length bytes counting themselves.
pub const MIN_DECLARED_LEN: i32 = 4;

/// Default maximum payload size: 64 MiB.
///
/// Generous enough for any realistic row, small enough to catch a corrupt
/// length prefix before it buffers the connection into the ground.
pub const DEFAULT_MAX_PAYLOAD: usize = 64 * 1024 * 1024;

/// A complete backend frame — one tagged, length-prefixed protocol unit.
///
/// Wire layout:
///
/// ```text
/// ┌──────────┬────────────────────┬──────────────────────────┐
/// │ tag (1B) │ length (4B BE i32) │ payload (length−4 bytes) │
/// │          │ counts itself,     │                          │
/// │          │ excludes the tag   │                          │
/// └──────────┴────────────────────┴──────────────────────────┘
/// ```
///
/// A `Frame` is only ever constructed once its full payload is present;
/// partial input is reported as leftover bytes, never as a short frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// The one-byte message-kind discriminator (e.g. `b'D'` for a data row).
    pub tag: u8,

    /// The payload bytes: exactly `declared length − 4` of them.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Read a single frame from the front of the provided byte slice.
    ///
    /// # Returns
    ///
    /// `Some((frame, bytes_consumed))` when a complete frame is available,
    /// or `None` when the buffer holds less than a full header or less
    /// than the declared payload. In the `None` case nothing is consumed —
    /// the header must be re-read once more bytes arrive.
    ///
    /// # Errors
    ///
    /// - [`WireError::InvalidLength`] if the declared length is below 4.
    /// - [`WireError::FrameTooLarge`] if the payload would exceed
    ///   `max_payload`.
    pub fn read_from(buf: &[u8], max_payload: usize) -> Result<Option<(Self, usize)>, WireError> {
        if buf.len() < HEADER_LEN {
            return Ok(None);
        }

        let tag = buf[0];
        let declared = i32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]);

        if declared < MIN_DECLARED_LEN {
            return Err(WireError::InvalidLength {
                tag,
                length: declared,
            });
        }

        #[allow(clippy::cast_sign_loss)]
        let payload_len = (declared - MIN_DECLARED_LEN) as usize;

        if payload_len > max_payload {
            return Err(WireError::FrameTooLarge {
                tag,
                length: payload_len,
                max: max_payload,
            });
        }

        let total = HEADER_LEN + payload_len;
        if buf.len() < total {
            return Ok(None);
        }

        let payload = buf[HEADER_LEN..total].to_vec();

        Ok(Some((Self { tag, payload }, total)))
    }
}

/// The result of one reassembly pass over a byte buffer.
///
/// `frames` holds every complete frame in wire order. `leftover` is the
/// unconsumed suffix — the header (or header plus partial payload) of a
/// trailing incomplete frame — and is `None` when the buffer divided into
/// frames exactly.
///
/// The reassembler keeps no state between calls. The leftover value IS the
/// cross-call state: ownership transfers to the caller, who must prepend it
/// to the next chunk before calling [`reassemble`] again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reassembly {
    /// Complete frames, in the order they appeared on the wire.
    pub frames: Vec<Frame>,

    /// Unconsumed prefix of an incomplete trailing frame, if any.
    pub leftover: Option<Vec<u8>>,
}

/// Split a buffer into complete frames plus the leftover of a trailing
/// incomplete frame.
///
/// Walks a cursor through `buf`, emitting a [`Frame`] for every complete
/// `tag + length + payload` unit. The walk stops at the first point where
/// fewer than 5 bytes remain or the declared payload has not fully arrived;
/// everything from that point on becomes `leftover`, header included, so
/// the next call re-reads the header against a longer buffer.
///
/// Incomplete input is never an error. The only failures are corrupt
/// declared lengths (below 4, or a payload above `max_payload`), which are
/// fatal for the stream — see [`WireError`].
///
/// # Errors
///
/// Propagates [`WireError::InvalidLength`] and [`WireError::FrameTooLarge`]
/// from [`Frame::read_from`].
pub fn reassemble(buf: &[u8], max_payload: usize) -> Result<Reassembly, WireError> {
    let mut frames = Vec::new();
    let mut cursor = 0;

    while let Some((frame, consumed)) = Frame::read_from(&buf[cursor..], max_payload)? {
        frames.push(frame);
        cursor += consumed;
    }

    let leftover = if cursor < buf.len() {
        Some(buf[cursor..].to_vec())
    } else {
        None
    };

    Ok(Reassembly { frames, leftover })
}
