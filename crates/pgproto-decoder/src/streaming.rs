use std::collections::VecDeque;

use pgproto_types::BackendMessage;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::decoder::MessageDecoder;
use crate::error::DecodeError;

/// Read-buffer size for each pull from the underlying source.
const READ_CHUNK: usize = 8 * 1024;

/// Asynchronous streaming decoder — yields messages one at a time as
/// bytes arrive from any [`AsyncRead`] source.
///
/// This is a convenience adapter over [`MessageDecoder`]: it owns the
/// leftover threading that a chunk-by-chunk caller would otherwise do by
/// hand. Each pull reads up to 8 KiB, appends it to the carry buffer,
/// decodes every complete frame, and queues the results. Backpressure is
/// natural — nothing is read until the caller awaits the next message.
///
/// The adapter owns no socket and does no transport management; hand it
/// a file, a read-half, or an in-memory cursor.
///
/// # Example
///
/// ```rust,no_run
/// use pgproto_decoder::StreamingDecoder;
/// use tokio::io::AsyncRead;
///
/// async fn drain(source: impl AsyncRead + Unpin) {
///     let mut stream = StreamingDecoder::new(source);
///     while let Some(message) = stream.next().await.transpose().unwrap() {
///         println!("{}", message.kind());
///     }
/// }
/// ```
pub struct StreamingDecoder<R> {
  reader: R,
  decoder: MessageDecoder,
  /// Unconsumed tail of a partial frame, carried between reads.
  carry: Vec<u8>,
  /// Messages decoded but not yet handed to the caller.
  queue: VecDeque<BackendMessage>,
  /// Set once the underlying reader reports EOF.
  eof: bool,
}

impl<R: AsyncRead + Unpin> StreamingDecoder<R> {
  /// Create a streaming decoder with the default frame-size limit.
  #[must_use]
  pub fn new(reader: R) -> Self {
    Self::with_decoder(reader, MessageDecoder::new())
  }

  /// Create a streaming decoder around a configured [`MessageDecoder`].
  #[must_use]
  pub fn with_decoder(reader: R, decoder: MessageDecoder) -> Self {
    Self {
      reader,
      decoder,
      carry: Vec::new(),
      queue: VecDeque::new(),
      eof: false,
    }
  }

  /// Yield the next decoded message.
  ///
  /// Returns `Ok(Some(message))` per message in wire order, `Ok(None)`
  /// once the source is cleanly exhausted, or `Err` on any decode or
  /// I/O failure. EOF with a partial frame still buffered is
  /// [`DecodeError::TruncatedStream`].
  pub async fn next(&mut self) -> Option<Result<BackendMessage, DecodeError>> {
    loop {
      if let Some(message) = self.queue.pop_front() {
        return Some(Ok(message));
      }

      if self.eof {
        if self.carry.is_empty() {
          return None;
        }
        let pending = self.carry.len();
        self.carry.clear();
        return Some(Err(DecodeError::TruncatedStream { pending }));
      }

      let mut chunk = [0u8; READ_CHUNK];
      match self.reader.read(&mut chunk).await {
        Ok(0) => self.eof = true,
        Ok(n) => {
          // Prepend the carry to the fresh bytes — the same contract a
          // synchronous caller follows by hand.
          let mut input = std::mem::take(&mut self.carry);
          input.extend_from_slice(&chunk[..n]);

          match self.decoder.decode(&input) {
            Ok(decoded) => {
              self.queue.extend(decoded.messages);
              if let Some(rest) = decoded.leftover {
                self.carry = rest;
              }
            }
            Err(e) => return Some(Err(e)),
          }
        }
        Err(e) => return Some(Err(DecodeError::Io(e))),
      }
    }
  }
}
