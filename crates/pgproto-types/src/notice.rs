use std::collections::BTreeMap;

use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// Documented field codes for error and notice messages.
///
/// The first three are always present; the rest are optional. Codes
/// outside this list are still stored — see [`NoticeFields`].
pub mod field_code {
    /// Severity: ERROR, FATAL, PANIC, WARNING, NOTICE, DEBUG, INFO, LOG.
    pub const SEVERITY: u8 = b'S';
    /// SQLSTATE code, e.g. `42601`.
    pub const CODE: u8 = b'C';
    /// Primary human-readable message.
    pub const MESSAGE: u8 = b'M';
    /// Secondary detail, possibly multi-line.
    pub const DETAIL: u8 = b'D';
    /// Suggestion for fixing the problem, possibly multi-line.
    pub const HINT: u8 = b'H';
    /// 1-based character index into the original query.
    pub const POSITION: u8 = b'P';
    /// As POSITION, but into an internally-generated command.
    pub const INTERNAL_POSITION: u8 = b'p';
    /// Text of the failed internal command.
    pub const INTERNAL_QUERY: u8 = b'q';
    /// Context or call-stack traceback.
    pub const WHERE: u8 = b'W';
    /// Source file that raised the error.
    pub const FILE: u8 = b'F';
    /// Source line that raised the error.
    pub const LINE: u8 = b'L';
    /// Source routine that raised the error.
    pub const ROUTINE: u8 = b'R';
}

/// Field map shared by ErrorResponse (`'E'`) and NoticeResponse (`'N'`).
///
/// Both message kinds carry the same payload shape — a sequence of
/// (1-byte code, null-terminated string) pairs closed by one extra null
/// byte — so they share this single decoder, parameterized only by which
/// variant the dispatcher wraps it in.
///
/// ```text
/// ┌──────┬─────────────────────┬──────┬─────────────────────┬──────┐
/// │ code │ value... \0         │ code │ value... \0         │ \0   │
/// └──────┴─────────────────────┴──────┴─────────────────────┴──────┘
/// ```
///
/// Codes outside the documented set are stored under their raw byte —
/// never dropped and never an error, so newer servers can add fields
/// without breaking older clients. The closing null terminates the
/// sequence and never produces an empty entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeFields {
    fields: BTreeMap<u8, String>,
}

impl NoticeFields {
    /// Decode a key-coded field payload.
    ///
    /// # Errors
    ///
    /// - [`TypeError::Truncated`] if the payload ends before the closing
    ///   null byte.
    /// - [`TypeError::UnterminatedString`] if a field value has no
    ///   terminator.
    /// - [`TypeError::InvalidUtf8`] on malformed text.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        let mut fields = BTreeMap::new();

        loop {
            let code = scan.u8()?;
            if code == 0 {
                // Closing null: the sequence is done.
                break;
            }
            let value = scan.cstr()?.to_owned();
            fields.insert(code, value);
        }

        Ok(Self { fields })
    }

    /// Look up a field by its raw code byte.
    #[must_use]
    pub fn get(&self, code: u8) -> Option<&str> {
        self.fields.get(&code).map(String::as_str)
    }

    /// Severity field (`S`), present on every well-formed message.
    #[must_use]
    pub fn severity(&self) -> Option<&str> {
        self.get(field_code::SEVERITY)
    }

    /// SQLSTATE code field (`C`).
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.get(field_code::CODE)
    }

    /// Primary message field (`M`).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.get(field_code::MESSAGE)
    }

    /// Detail field (`D`).
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.get(field_code::DETAIL)
    }

    /// Hint field (`H`).
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.get(field_code::HINT)
    }

    /// Iterate over `(code, value)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.fields.iter().map(|(&code, value)| (code, value.as_str()))
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields were present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
