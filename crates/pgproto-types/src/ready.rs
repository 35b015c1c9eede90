use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// Backend transaction status, carried by ReadyForQuery (`'Z'`).
///
/// ```text
/// ┌──────┬───────────────┬────────────────────────────────────┐
/// │ Byte │ Variant       │ Meaning                            │
/// ├──────┼───────────────┼────────────────────────────────────┤
/// │ 'I'  │ Idle          │ not in a transaction block         │
/// │ 'T'  │ InTransaction │ inside an open transaction block   │
/// │ 'E'  │ Failed        │ in a failed transaction block      │
/// └──────┴───────────────┴────────────────────────────────────┘
/// ```
///
/// Any other byte is rejected rather than stored raw — a status outside
/// this set means the stream is desynchronized or the server speaks a
/// dialect this decoder does not know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    Idle,
    InTransaction,
    Failed,
}

impl TransactionStatus {
    /// Parse a status byte.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnknownTransactionStatus`] for bytes outside
    /// `{I, T, E}`.
    pub fn from_byte(byte: u8) -> Result<Self, TypeError> {
        match byte {
            b'I' => Ok(Self::Idle),
            b'T' => Ok(Self::InTransaction),
            b'E' => Ok(Self::Failed),
            other => Err(TypeError::UnknownTransactionStatus { byte: other }),
        }
    }

    /// The wire byte for this status.
    pub fn byte(self) -> u8 {
        match self {
            Self::Idle => b'I',
            Self::InTransaction => b'T',
            Self::Failed => b'E',
        }
    }

    /// Decode a ReadyForQuery payload: exactly one status byte.
    ///
    /// # Errors
    ///
    /// [`TypeError::Truncated`] on an empty payload,
    /// [`TypeError::UnknownTransactionStatus`] on an unrecognized byte.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        Self::from_byte(scan.u8()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_bytes_roundtrip() {
        for (byte, status) in [
            (b'I', TransactionStatus::Idle),
            (b'T', TransactionStatus::InTransaction),
            (b'E', TransactionStatus::Failed),
        ] {
            assert_eq!(TransactionStatus::from_byte(byte).unwrap(), status);
            assert_eq!(status.byte(), byte);
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(matches!(
            TransactionStatus::decode(b"X"),
            Err(TypeError::UnknownTransactionStatus { byte: b'X' })
        ));
    }

    #[test]
    fn empty_payload_rejected() {
        assert!(matches!(
            TransactionStatus::decode(b""),
            Err(TypeError::Truncated { .. })
        ));
    }
}
