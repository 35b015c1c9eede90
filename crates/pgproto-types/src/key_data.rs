use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// BackendKeyData (`'K'`) — cancellation credentials for this session.
///
/// The connection layer needs both values to issue a query-cancel
/// request on a separate connection later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackendKeyData {
    pub process_id: i32,
    pub secret_key: i32,
}

impl BackendKeyData {
    /// Decode from two back-to-back big-endian 32-bit integers.
    ///
    /// # Errors
    ///
    /// [`TypeError::Truncated`] if fewer than 8 payload bytes.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        Ok(Self {
            process_id: scan.i32()?,
            secret_key: scan.i32()?,
        })
    }
}
