use pgproto_types::BackendMessage;
use pgproto_wire::frame::DEFAULT_MAX_PAYLOAD;
use pgproto_wire::reassemble;

use crate::error::DecodeError;

/// The result of decoding one chunk of backend bytes.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ DecodedChunk                                         │
/// │   messages: Vec<BackendMessage> ← wire order         │
/// │   leftover: Option<Vec<u8>>     ← partial tail frame │
/// └──────────────────────────────────────────────────────┘
/// ```
///
/// `leftover` is the caller's responsibility: prepend it to the next
/// chunk received from the transport before decoding again. It is `None`
/// when the chunk divided into frames exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedChunk {
    /// Fully decoded messages, in the order they appeared on the wire.
    pub messages: Vec<BackendMessage>,

    /// Unconsumed prefix of an incomplete trailing frame, if any.
    pub leftover: Option<Vec<u8>>,
}

/// Synchronous backend-message decoder — parses one in-memory chunk.
///
/// The decoder is a pure transformation: reassemble frames, then convert
/// each into a [`BackendMessage`] through the exhaustive tag dispatch.
/// It performs no I/O, holds no state between calls, and runs in time
/// proportional to the input. The only value threaded across calls is
/// the explicit leftover in [`DecodedChunk`], owned by the caller —
/// independent streams decode concurrently so long as each keeps its own
/// leftover separate.
///
/// Decoding proceeds in two steps:
///
///   1. **Reassembly**: split the chunk into complete frames plus the
///      leftover of a trailing incomplete frame (`pgproto_wire`).
///   2. **Dispatch**: for each frame, parse the tag byte and run the
///      matching field decoder (`pgproto_types`). A frame decodes fully
///      or the whole call fails — there is no partial-success mode.
///
/// # Example
///
/// ```rust
/// use pgproto_decoder::MessageDecoder;
///
/// // A complete ReadyForQuery frame: tag 'Z', length 5, status 'I'.
/// let chunk = [b'Z', 0, 0, 0, 5, b'I'];
///
/// let decoder = MessageDecoder::new();
/// let decoded = decoder.decode(&chunk).unwrap();
/// assert_eq!(decoded.messages.len(), 1);
/// assert!(decoded.leftover.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct MessageDecoder {
    max_payload: usize,
}

impl Default for MessageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageDecoder {
    /// Create a decoder with the default frame-size limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_payload: DEFAULT_MAX_PAYLOAD,
        }
    }

    /// Create a decoder that rejects payloads larger than `max_payload`.
    #[must_use]
    pub fn with_max_payload(max_payload: usize) -> Self {
        Self { max_payload }
    }

    /// Decode a chunk of backend bytes into typed messages.
    ///
    /// The caller must have prepended any leftover returned by the
    /// previous call; this function sees one contiguous buffer.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] for a corrupt or oversized declared length.
    /// - [`DecodeError::Type`] for an unknown tag, an unsupported message
    ///   kind or authentication code, or a malformed payload.
    pub fn decode(&self, buf: &[u8]) -> Result<DecodedChunk, DecodeError> {
        let batch = reassemble(buf, self.max_payload)?;

        let mut messages = Vec::with_capacity(batch.frames.len());
        for frame in &batch.frames {
            messages.push(BackendMessage::decode_frame(frame)?);
        }

        Ok(DecodedChunk {
            messages,
            leftover: batch.leftover,
        })
    }
}
