#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod streaming;

pub use decoder::{DecodedChunk, MessageDecoder};
pub use error::DecodeError;
pub use streaming::StreamingDecoder;
