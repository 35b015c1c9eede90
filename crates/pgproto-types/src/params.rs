use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// ParameterStatus (`'S'`) — a run-time parameter report, sent at startup
/// and whenever a reported setting changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterStatus {
    pub name: String,
    pub value: String,
}

impl ParameterStatus {
    /// Decode from two back-to-back null-terminated strings.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnterminatedString`] or [`TypeError::InvalidUtf8`] if
    /// either string is malformed.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        Ok(Self {
            name: scan.cstr()?.to_owned(),
            value: scan.cstr()?.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_name_value_pair() {
        let status = ParameterStatus::decode(b"client_encoding\0UTF8\0").unwrap();
        assert_eq!(status.name, "client_encoding");
        assert_eq!(status.value, "UTF8");
    }

    #[test]
    fn empty_value_is_valid() {
        let status = ParameterStatus::decode(b"application_name\0\0").unwrap();
        assert_eq!(status.name, "application_name");
        assert_eq!(status.value, "");
    }

    #[test]
    fn missing_second_string_rejected() {
        assert!(matches!(
            ParameterStatus::decode(b"client_encoding\0"),
            Err(TypeError::UnterminatedString { .. })
        ));
    }
}
