use crate::tag::BackendTag;

/// Errors that can occur while decoding a frame payload into a typed
/// backend message.
///
/// These are higher-level than [`pgproto_wire::WireError`] — the frame
/// envelope was already intact; these describe problems with the bytes
/// inside it, or capability gaps where the frame is valid protocol this
/// decoder does not implement.
///
/// # Error hierarchy
///
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                                       │
/// │   ├── UnknownTag             tag outside the protocol        │
/// │   ├── UnsupportedMessage     documented tag, not implemented │
/// │   ├── UnsupportedAuthentication   same, for auth sub-types   │
/// │   ├── Truncated              payload shorter than declared   │
/// │   ├── UnterminatedString     missing null terminator         │
/// │   ├── InvalidUtf8            text field not valid UTF-8      │
/// │   ├── InvalidColumnLength    DataRow length below -1         │
/// │   └── UnknownTransactionStatus   status byte outside {I,T,E} │
/// └──────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The frame tag is not part of the documented backend protocol.
    ///
    /// Distinct from [`UnsupportedMessage`](Self::UnsupportedMessage):
    /// an unknown tag means the stream is corrupt or the server speaks a
    /// newer protocol; an unsupported one is a known capability gap.
    #[error("unknown backend message tag {byte:#04X}")]
    UnknownTag { byte: u8 },

    /// A documented message kind this decoder does not implement.
    ///
    /// Covers the Bind/Close/Parse completions, COPY sub-protocol
    /// responses, notifications, portal suspension, parameter and
    /// function-call descriptions. Always fatal — the caller must treat
    /// the connection as unusable rather than skip the frame.
    #[error("unsupported backend message type: {tag}")]
    UnsupportedMessage { tag: BackendTag },

    /// An authentication request sub-type this decoder does not implement
    /// (Kerberos V5, SCM credential, GSS, GSS continuation, SSPI) or does
    /// not recognize at all.
    #[error("unsupported authentication request code {code}")]
    UnsupportedAuthentication { code: i32 },

    /// The payload ended before a declared sub-field was complete.
    #[error("payload truncated: needed {needed} byte(s) at offset {offset}")]
    Truncated { needed: usize, offset: usize },

    /// A null-terminated string ran off the end of the payload.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A text field contained invalid UTF-8 bytes.
    #[error("invalid UTF-8 in text field at offset {offset}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// A DataRow column declared a negative length other than the -1
    /// null marker.
    #[error("invalid column value length {length} (only -1 may be negative)")]
    InvalidColumnLength { length: i32 },

    /// The ReadyForQuery status byte was not one of `I`, `T`, or `E`.
    #[error("unknown transaction status byte {byte:#04X}")]
    UnknownTransactionStatus { byte: u8 },
}
