use pgproto_types::TypeError;
use pgproto_wire::WireError;

/// Errors surfaced by the chunk and streaming decoders.
///
/// The decoder validates at two levels — frame envelope and typed
/// payload — and each level's error passes through unchanged. Incomplete
/// input is NOT an error at this layer: it comes back as leftover bytes
/// (or, for the streaming decoder, stays in the internal carry buffer)
/// and resolves itself when more input arrives.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)        ← corrupt declared length, oversized frame
///   ├── Type(TypeError)        ← unknown/unsupported tag, malformed payload
///   ├── TruncatedStream        ← streaming source ended mid-frame
///   └── Io(std::io::Error)     ← from the streaming reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A frame-envelope error from `pgproto-wire`.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A typed-payload error from `pgproto-types`.
    ///
    /// Covers capability gaps (unsupported message kinds, unsupported
    /// authentication codes, unknown tags) as well as malformed payloads.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// The streaming source reached EOF with a partial frame buffered.
    ///
    /// A well-behaved backend never ends a stream mid-frame; this means
    /// the connection dropped or the capture was cut short.
    #[error("stream ended mid-frame with {pending} byte(s) buffered")]
    TruncatedStream { pending: usize },

    /// An I/O error from the underlying reader (streaming decoder only).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
