use crate::error::TypeError;

/// Backend message tag — the one-byte discriminator on every frame.
///
/// Every tag the backend protocol documents is enumerated, including the
/// kinds this decoder deliberately does not implement. Dispatch is an
/// exhaustive match, so an unimplemented kind is an explicit
/// [`TypeError::UnsupportedMessage`] arm rather than a silent table miss,
/// and a byte outside this table fails [`from_byte`](Self::from_byte)
/// with [`TypeError::UnknownTag`].
///
/// ```text
/// ┌──────┬──────────────────────┬───────────┐
/// │ Byte │ Variant              │ Decoded?  │
/// ├──────┼──────────────────────┼───────────┤
/// │ 'R'  │ Authentication       │ yes (sub-dispatched) │
/// │ 'K'  │ BackendKeyData       │ yes       │
/// │ 'C'  │ CommandComplete      │ yes       │
/// │ 'c'  │ CopyDone             │ yes       │
/// │ 'D'  │ DataRow              │ yes       │
/// │ 'E'  │ ErrorResponse        │ yes       │
/// │ 'n'  │ NoData               │ yes       │
/// │ 'N'  │ NoticeResponse       │ yes       │
/// │ 'S'  │ ParameterStatus      │ yes       │
/// │ 'Z'  │ ReadyForQuery        │ yes       │
/// │ 'T'  │ RowDescription       │ yes       │
/// │ '1'  │ ParseComplete        │ no        │
/// │ '2'  │ BindComplete         │ no        │
/// │ '3'  │ CloseComplete        │ no        │
/// │ 'A'  │ NotificationResponse │ no        │
/// │ 'd'  │ CopyData             │ no        │
/// │ 'G'  │ CopyInResponse       │ no        │
/// │ 'H'  │ CopyOutResponse      │ no        │
/// │ 'I'  │ EmptyQueryResponse   │ no        │
/// │ 's'  │ PortalSuspended      │ no        │
/// │ 't'  │ ParameterDescription │ no        │
/// │ 'V'  │ FunctionCallResponse │ no        │
/// │ 'W'  │ CopyBothResponse     │ no        │
/// └──────┴──────────────────────┴───────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendTag {
    Authentication,
    BackendKeyData,
    BindComplete,
    CloseComplete,
    CommandComplete,
    CopyBothResponse,
    CopyData,
    CopyDone,
    CopyInResponse,
    CopyOutResponse,
    DataRow,
    EmptyQueryResponse,
    ErrorResponse,
    FunctionCallResponse,
    NoData,
    NoticeResponse,
    NotificationResponse,
    ParameterDescription,
    ParameterStatus,
    ParseComplete,
    PortalSuspended,
    ReadyForQuery,
    RowDescription,
}

impl BackendTag {
    /// Parse a wire byte into a [`BackendTag`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnknownTag`] for any byte outside the
    /// documented protocol — fatal, never a skip.
    pub fn from_byte(byte: u8) -> Result<Self, TypeError> {
        match byte {
            b'R' => Ok(Self::Authentication),
            b'K' => Ok(Self::BackendKeyData),
            b'2' => Ok(Self::BindComplete),
            b'3' => Ok(Self::CloseComplete),
            b'C' => Ok(Self::CommandComplete),
            b'W' => Ok(Self::CopyBothResponse),
            b'd' => Ok(Self::CopyData),
            b'c' => Ok(Self::CopyDone),
            b'G' => Ok(Self::CopyInResponse),
            b'H' => Ok(Self::CopyOutResponse),
            b'D' => Ok(Self::DataRow),
            b'I' => Ok(Self::EmptyQueryResponse),
            b'E' => Ok(Self::ErrorResponse),
            b'V' => Ok(Self::FunctionCallResponse),
            b'n' => Ok(Self::NoData),
            b'N' => Ok(Self::NoticeResponse),
            b'A' => Ok(Self::NotificationResponse),
            b't' => Ok(Self::ParameterDescription),
            b'S' => Ok(Self::ParameterStatus),
            b'1' => Ok(Self::ParseComplete),
            b's' => Ok(Self::PortalSuspended),
            b'Z' => Ok(Self::ReadyForQuery),
            b'T' => Ok(Self::RowDescription),
            other => Err(TypeError::UnknownTag { byte: other }),
        }
    }

    /// Return the single-byte wire value for this tag.
    pub fn byte(self) -> u8 {
        match self {
            Self::Authentication => b'R',
            Self::BackendKeyData => b'K',
            Self::BindComplete => b'2',
            Self::CloseComplete => b'3',
            Self::CommandComplete => b'C',
            Self::CopyBothResponse => b'W',
            Self::CopyData => b'd',
            Self::CopyDone => b'c',
            Self::CopyInResponse => b'G',
            Self::CopyOutResponse => b'H',
            Self::DataRow => b'D',
            Self::EmptyQueryResponse => b'I',
            Self::ErrorResponse => b'E',
            Self::FunctionCallResponse => b'V',
            Self::NoData => b'n',
            Self::NoticeResponse => b'N',
            Self::NotificationResponse => b'A',
            Self::ParameterDescription => b't',
            Self::ParameterStatus => b'S',
            Self::ParseComplete => b'1',
            Self::PortalSuspended => b's',
            Self::ReadyForQuery => b'Z',
            Self::RowDescription => b'T',
        }
    }

    /// The message-kind name, as used in diagnostics and display output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Authentication => "Authentication",
            Self::BackendKeyData => "BackendKeyData",
            Self::BindComplete => "BindComplete",
            Self::CloseComplete => "CloseComplete",
            Self::CommandComplete => "CommandComplete",
            Self::CopyBothResponse => "CopyBothResponse",
            Self::CopyData => "CopyData",
            Self::CopyDone => "CopyDone",
            Self::CopyInResponse => "CopyInResponse",
            Self::CopyOutResponse => "CopyOutResponse",
            Self::DataRow => "DataRow",
            Self::EmptyQueryResponse => "EmptyQueryResponse",
            Self::ErrorResponse => "ErrorResponse",
            Self::FunctionCallResponse => "FunctionCallResponse",
            Self::NoData => "NoData",
            Self::NoticeResponse => "NoticeResponse",
            Self::NotificationResponse => "NotificationResponse",
            Self::ParameterDescription => "ParameterDescription",
            Self::ParameterStatus => "ParameterStatus",
            Self::ParseComplete => "ParseComplete",
            Self::PortalSuspended => "PortalSuspended",
            Self::ReadyForQuery => "ReadyForQuery",
            Self::RowDescription => "RowDescription",
        }
    }

    /// Whether this decoder implements a field decoder for the tag.
    ///
    /// `false` means dispatch will fail with
    /// [`TypeError::UnsupportedMessage`] — a capability gap, not an
    /// unknown tag.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            Self::Authentication
                | Self::BackendKeyData
                | Self::CommandComplete
                | Self::CopyDone
                | Self::DataRow
                | Self::ErrorResponse
                | Self::NoData
                | Self::NoticeResponse
                | Self::ParameterStatus
                | Self::ReadyForQuery
                | Self::RowDescription
        )
    }
}

impl std::fmt::Display for BackendTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ('{}')", self.name(), self.byte() as char)
    }
}
