#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The 4-byte declared length was smaller than the 4 bytes it counts.
    ///
    /// A well-formed frame always declares at least 4 (an empty payload).
    /// Zero or negative values mean the stream is corrupt; treating them
    /// like "not enough data yet" would wait forever for bytes that are
    /// never coming.
    #[error("invalid declared length {length} on frame tag {tag:#04X}")]
    InvalidLength { tag: u8, length: i32 },

    /// The declared payload size exceeds the configured maximum.
    ///
    /// The limit exists to fail fast on corrupt length prefixes instead of
    /// buffering toward a frame larger than the transport will ever
    /// deliver. The default is [`DEFAULT_MAX_PAYLOAD`](crate::frame::DEFAULT_MAX_PAYLOAD).
    #[error("frame tag {tag:#04X} declares a {length}-byte payload, maximum is {max}")]
    FrameTooLarge { tag: u8, length: usize, max: usize },
}
