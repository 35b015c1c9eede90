use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// Authentication request sub-type codes.
///
/// The `'R'` frame carries a secondary discriminator: a 4-byte big-endian
/// integer at payload offset 0. These are the documented values.
pub mod auth_code {
    pub const OK: i32 = 0;
    pub const KERBEROS_V5: i32 = 2;
    pub const CLEARTEXT_PASSWORD: i32 = 3;
    pub const MD5_PASSWORD: i32 = 5;
    pub const SCM_CREDENTIAL: i32 = 6;
    pub const GSS: i32 = 7;
    pub const GSS_CONTINUE: i32 = 8;
    pub const SSPI: i32 = 9;
}

/// A decoded authentication request from the backend.
///
/// Sub-dispatch table:
///
/// ```text
/// ┌──────┬─────────────────────────┬────────────────────────────────┐
/// │ Code │ Variant                 │ Extra payload                  │
/// ├──────┼─────────────────────────┼────────────────────────────────┤
/// │ 0    │ Ok                      │ none                           │
/// │ 3    │ CleartextPassword       │ none                           │
/// │ 5    │ Md5Password             │ 4-byte salt at bytes [4, 8)    │
/// │ 2    │ — (Kerberos V5)         │ unsupported                    │
/// │ 6    │ — (SCM credential)      │ unsupported                    │
/// │ 7    │ — (GSS)                 │ unsupported                    │
/// │ 8    │ — (GSS continue)        │ unsupported                    │
/// │ 9    │ — (SSPI)                │ unsupported                    │
/// └──────┴─────────────────────────┴────────────────────────────────┘
/// ```
///
/// The MD5 salt lives on the variant itself. Password hashing is the
/// connection layer's job; this layer only surfaces what the server sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    /// Authentication succeeded; no credentials required.
    Ok,

    /// The server wants the password in cleartext.
    CleartextPassword,

    /// The server wants an MD5-hashed password using this salt.
    Md5Password { salt: [u8; 4] },
}

impl AuthRequest {
    /// Decode an authentication request payload.
    ///
    /// # Errors
    ///
    /// - [`TypeError::Truncated`] if the code or salt is cut short.
    /// - [`TypeError::UnsupportedAuthentication`] for codes 2, 6, 7, 8, 9
    ///   and anything unrecognized.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        let code = scan.i32()?;

        match code {
            auth_code::OK => Ok(Self::Ok),
            auth_code::CLEARTEXT_PASSWORD => Ok(Self::CleartextPassword),
            auth_code::MD5_PASSWORD => {
                let raw = scan.bytes(4)?;
                let salt: [u8; 4] = raw.try_into().expect("length already checked");
                Ok(Self::Md5Password { salt })
            }
            other => Err(TypeError::UnsupportedAuthentication { code: other }),
        }
    }

    /// The specific request-kind name, used as the message's event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ok => "AuthenticationOk",
            Self::CleartextPassword => "AuthenticationCleartextPassword",
            Self::Md5Password { .. } => "AuthenticationMd5Password",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ok() {
        let payload = 0i32.to_be_bytes();
        assert_eq!(AuthRequest::decode(&payload).unwrap(), AuthRequest::Ok);
    }

    #[test]
    fn decode_cleartext() {
        let payload = 3i32.to_be_bytes();
        assert_eq!(
            AuthRequest::decode(&payload).unwrap(),
            AuthRequest::CleartextPassword
        );
    }

    #[test]
    fn decode_md5_extracts_salt() {
        let mut payload = 5i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(
            AuthRequest::decode(&payload).unwrap(),
            AuthRequest::Md5Password {
                salt: [0xDE, 0xAD, 0xBE, 0xEF]
            }
        );
    }

    #[test]
    fn md5_without_salt_truncated() {
        let mut payload = 5i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&[0xDE, 0xAD]); // only half the salt
        assert!(matches!(
            AuthRequest::decode(&payload),
            Err(TypeError::Truncated { .. })
        ));
    }

    #[test]
    fn documented_but_unsupported_codes_rejected() {
        for code in [
            auth_code::KERBEROS_V5,
            auth_code::SCM_CREDENTIAL,
            auth_code::GSS,
            auth_code::GSS_CONTINUE,
            auth_code::SSPI,
        ] {
            let payload = code.to_be_bytes();
            assert!(
                matches!(
                    AuthRequest::decode(&payload),
                    Err(TypeError::UnsupportedAuthentication { code: c }) if c == code
                ),
                "code {code} should be unsupported"
            );
        }
    }

    #[test]
    fn unrecognized_code_rejected() {
        let payload = 42i32.to_be_bytes();
        assert!(matches!(
            AuthRequest::decode(&payload),
            Err(TypeError::UnsupportedAuthentication { code: 42 })
        ));
    }

    #[test]
    fn truncated_code_rejected() {
        assert!(matches!(
            AuthRequest::decode(&[0x00, 0x00]),
            Err(TypeError::Truncated { .. })
        ));
    }
}
