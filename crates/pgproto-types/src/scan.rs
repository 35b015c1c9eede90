use crate::error::TypeError;

/// Cursor-based reader for a frame payload.
///
/// Every field decoder walks its payload through one of these. The
/// scanner wraps the payload slice with a position and hands out typed
/// reads; any read past the end is [`TypeError::Truncated`] — a payload
/// is never silently padded, zero-filled, or defaulted.
///
/// All multi-byte reads are big-endian, as the wire format specifies.
///
/// # Usage pattern
///
/// ```text
///   let mut scan = PayloadScanner::new(payload);
///   let process_id = scan.i32()?;
///   let secret_key = scan.i32()?;
/// ```
pub struct PayloadScanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PayloadScanner<'a> {
    /// Create a scanner positioned at the start of the payload.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Consume `n` raw bytes.
    ///
    /// # Errors
    ///
    /// [`TypeError::Truncated`] if fewer than `n` bytes remain.
    pub fn bytes(&mut self, n: usize) -> Result<&'a [u8], TypeError> {
        let end = self.pos.checked_add(n).ok_or(TypeError::Truncated {
            needed: n,
            offset: self.pos,
        })?;
        let slice = self.buf.get(self.pos..end).ok_or(TypeError::Truncated {
            needed: n,
            offset: self.pos,
        })?;
        self.pos = end;
        Ok(slice)
    }

    /// Consume a single byte.
    pub fn u8(&mut self) -> Result<u8, TypeError> {
        Ok(self.bytes(1)?[0])
    }

    /// Consume a big-endian signed 16-bit integer.
    pub fn i16(&mut self) -> Result<i16, TypeError> {
        let b = self.bytes(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    /// Consume a big-endian unsigned 16-bit integer.
    pub fn u16(&mut self) -> Result<u16, TypeError> {
        let b = self.bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Consume a big-endian signed 32-bit integer.
    pub fn i32(&mut self) -> Result<i32, TypeError> {
        let b = self.bytes(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Consume a big-endian unsigned 32-bit integer.
    pub fn u32(&mut self) -> Result<u32, TypeError> {
        let b = self.bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Consume `n` bytes and validate them as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`TypeError::Truncated`] on under-run, [`TypeError::InvalidUtf8`]
    /// on bad bytes.
    pub fn text(&mut self, n: usize) -> Result<&'a str, TypeError> {
        let start = self.pos;
        let raw = self.bytes(n)?;
        std::str::from_utf8(raw).map_err(|source| TypeError::InvalidUtf8 {
            offset: start,
            source,
        })
    }

    /// Consume a null-terminated UTF-8 string, including its terminator.
    ///
    /// Returns the string without the trailing null.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnterminatedString`] if no null byte remains,
    /// [`TypeError::InvalidUtf8`] on bad bytes.
    pub fn cstr(&mut self) -> Result<&'a str, TypeError> {
        let start = self.pos;
        let rest = &self.buf[self.pos..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(TypeError::UnterminatedString { offset: start })?;
        let text = std::str::from_utf8(&rest[..nul]).map_err(|source| TypeError::InvalidUtf8 {
            offset: start,
            source,
        })?;
        self.pos += nul + 1; // past the terminator
        Ok(text)
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when the whole payload has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_reads_are_big_endian() {
        let buf = [0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x2A];
        let mut scan = PayloadScanner::new(&buf);
        assert_eq!(scan.i16().unwrap(), 1);
        assert_eq!(scan.i32().unwrap(), -1);
        assert_eq!(scan.i32().unwrap(), 42);
        assert!(scan.is_empty());
    }

    #[test]
    fn unsigned_reads() {
        let buf = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut scan = PayloadScanner::new(&buf);
        assert_eq!(scan.u16().unwrap(), u16::MAX);
        assert_eq!(scan.u32().unwrap(), u32::MAX);
    }

    #[test]
    fn cstr_consumes_terminator() {
        let buf = b"hello\0world\0";
        let mut scan = PayloadScanner::new(buf);
        assert_eq!(scan.cstr().unwrap(), "hello");
        assert_eq!(scan.position(), 6);
        assert_eq!(scan.cstr().unwrap(), "world");
        assert!(scan.is_empty());
    }

    #[test]
    fn empty_cstr_is_valid() {
        let mut scan = PayloadScanner::new(b"\0");
        assert_eq!(scan.cstr().unwrap(), "");
        assert!(scan.is_empty());
    }

    #[test]
    fn unterminated_cstr_rejected() {
        let mut scan = PayloadScanner::new(b"no null here");
        assert!(matches!(
            scan.cstr(),
            Err(TypeError::UnterminatedString { offset: 0 })
        ));
    }

    #[test]
    fn under_run_reports_offset() {
        let mut scan = PayloadScanner::new(&[0x01, 0x02]);
        scan.u8().unwrap();
        let result = scan.i32();
        assert!(matches!(
            result,
            Err(TypeError::Truncated {
                needed: 4,
                offset: 1
            })
        ));
    }

    #[test]
    fn invalid_utf8_in_text() {
        let mut scan = PayloadScanner::new(&[0xFF, 0xFE]);
        assert!(matches!(
            scan.text(2),
            Err(TypeError::InvalidUtf8 { offset: 0, .. })
        ));
    }

    #[test]
    fn invalid_utf8_in_cstr() {
        let mut scan = PayloadScanner::new(&[0xC3, 0x28, 0x00]);
        assert!(matches!(scan.cstr(), Err(TypeError::InvalidUtf8 { .. })));
    }
}
