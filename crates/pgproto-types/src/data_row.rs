use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// Length marker for a NULL column value.
const NULL_COLUMN: i32 = -1;

/// DataRow (`'D'`) — one row of query results.
///
/// Payload layout:
///
/// ```text
/// ┌──────────────────┬─────────────────────────────────────────┐
/// │ column count     │ 2-byte BE                               │
/// │ per column:      │                                         │
/// │   value length L │ 4-byte BE signed                        │
/// │   value          │ L bytes UTF-8 text when L >= 0          │
/// │                  │ no bytes when L == -1 (NULL)            │
/// └──────────────────┴─────────────────────────────────────────┘
/// ```
///
/// Column order matches the wire and lines up positionally with the
/// preceding RowDescription. Values arrive as text; interpreting them
/// against the described types is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataRow {
    /// Column values in wire order; `None` is SQL NULL.
    pub columns: Vec<Option<String>>,
}

impl DataRow {
    /// Decode a DataRow payload.
    ///
    /// # Errors
    ///
    /// - [`TypeError::InvalidColumnLength`] for a negative length other
    ///   than the -1 NULL marker.
    /// - [`TypeError::Truncated`] if a value is cut short.
    /// - [`TypeError::InvalidUtf8`] if a value is not UTF-8 text.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        let count = scan.u16()?;

        let mut columns = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            let length = scan.i32()?;
            let value = if length == NULL_COLUMN {
                None
            } else if length < 0 {
                return Err(TypeError::InvalidColumnLength { length });
            } else {
                #[allow(clippy::cast_sign_loss)]
                let value_len = length as usize;
                Some(scan.text(value_len)?.to_owned())
            };
            columns.push(value);
        }

        Ok(Self { columns })
    }
}
