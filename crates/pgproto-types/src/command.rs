use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// CommandComplete (`'C'`) — the command tag reported when a statement
/// finishes, e.g. `"SELECT 99"` or `"INSERT 0 1"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandComplete {
    /// The command tag text, without its trailing null.
    pub tag: String,
}

impl CommandComplete {
    /// # Errors
    ///
    /// [`TypeError::UnterminatedString`] or [`TypeError::InvalidUtf8`] if
    /// the payload is not a well-formed null-terminated string.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        Ok(Self {
            tag: scan.cstr()?.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_null() {
        let done = CommandComplete::decode(b"SELECT 99\0").unwrap();
        assert_eq!(done.tag, "SELECT 99");
    }

    #[test]
    fn missing_terminator_rejected() {
        assert!(matches!(
            CommandComplete::decode(b"SELECT 99"),
            Err(TypeError::UnterminatedString { .. })
        ));
    }
}
