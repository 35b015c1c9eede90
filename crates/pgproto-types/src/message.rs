use pgproto_wire::Frame;

use crate::auth::AuthRequest;
use crate::command::CommandComplete;
use crate::data_row::DataRow;
use crate::error::TypeError;
use crate::key_data::BackendKeyData;
use crate::notice::NoticeFields;
use crate::params::ParameterStatus;
use crate::ready::TransactionStatus;
use crate::row_description::RowDescription;
use crate::tag::BackendTag;

/// A fully decoded backend message — the union of every supported kind.
///
/// This is the type the decoder hands to callers. Each variant wraps the
/// corresponding record from this crate; `CopyDone` and `NoData` carry no
/// fields and are unit variants.
///
/// ```text
/// ┌──────────────────┬──────┬───────────────────────────────┐
/// │ Variant          │ Tag  │ Record                        │
/// ├──────────────────┼──────┼───────────────────────────────┤
/// │ Authentication   │ 'R'  │ AuthRequest (sub-dispatched)  │
/// │ BackendKeyData   │ 'K'  │ BackendKeyData                │
/// │ CommandComplete  │ 'C'  │ CommandComplete               │
/// │ CopyDone         │ 'c'  │ —                             │
/// │ DataRow          │ 'D'  │ DataRow                       │
/// │ ErrorResponse    │ 'E'  │ NoticeFields                  │
/// │ NoData           │ 'n'  │ —                             │
/// │ NoticeResponse   │ 'N'  │ NoticeFields                  │
/// │ ParameterStatus  │ 'S'  │ ParameterStatus               │
/// │ ReadyForQuery    │ 'Z'  │ TransactionStatus             │
/// │ RowDescription   │ 'T'  │ RowDescription                │
/// └──────────────────┴──────┴───────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendMessage {
    Authentication(AuthRequest),
    BackendKeyData(BackendKeyData),
    CommandComplete(CommandComplete),
    CopyDone,
    DataRow(DataRow),
    ErrorResponse(NoticeFields),
    NoData,
    NoticeResponse(NoticeFields),
    ParameterStatus(ParameterStatus),
    ReadyForQuery(TransactionStatus),
    RowDescription(RowDescription),
}

impl BackendMessage {
    /// Decode a payload into a typed message, dispatching on the tag.
    ///
    /// The match is exhaustive over [`BackendTag`]: every supported kind
    /// routes to its field decoder, and every recognized-but-unimplemented
    /// kind hits an explicit arm that fails with
    /// [`TypeError::UnsupportedMessage`]. There is no path on which a
    /// frame is silently dropped.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnsupportedMessage`] for the unimplemented kinds, or
    /// whatever the field decoder reports for a malformed payload.
    pub fn decode(tag: BackendTag, payload: &[u8]) -> Result<Self, TypeError> {
        match tag {
            BackendTag::Authentication => Ok(Self::Authentication(AuthRequest::decode(payload)?)),
            BackendTag::BackendKeyData => {
                Ok(Self::BackendKeyData(BackendKeyData::decode(payload)?))
            }
            BackendTag::CommandComplete => {
                Ok(Self::CommandComplete(CommandComplete::decode(payload)?))
            }
            BackendTag::CopyDone => Ok(Self::CopyDone),
            BackendTag::DataRow => Ok(Self::DataRow(DataRow::decode(payload)?)),
            BackendTag::ErrorResponse => Ok(Self::ErrorResponse(NoticeFields::decode(payload)?)),
            BackendTag::NoData => Ok(Self::NoData),
            BackendTag::NoticeResponse => Ok(Self::NoticeResponse(NoticeFields::decode(payload)?)),
            BackendTag::ParameterStatus => {
                Ok(Self::ParameterStatus(ParameterStatus::decode(payload)?))
            }
            BackendTag::ReadyForQuery => {
                Ok(Self::ReadyForQuery(TransactionStatus::decode(payload)?))
            }
            BackendTag::RowDescription => {
                Ok(Self::RowDescription(RowDescription::decode(payload)?))
            }

            // Documented kinds with no field decoder. Listed one by one so
            // adding a tag variant forces a decision here.
            BackendTag::BindComplete
            | BackendTag::CloseComplete
            | BackendTag::CopyBothResponse
            | BackendTag::CopyData
            | BackendTag::CopyInResponse
            | BackendTag::CopyOutResponse
            | BackendTag::EmptyQueryResponse
            | BackendTag::FunctionCallResponse
            | BackendTag::NotificationResponse
            | BackendTag::ParameterDescription
            | BackendTag::ParseComplete
            | BackendTag::PortalSuspended => Err(TypeError::UnsupportedMessage { tag }),
        }
    }

    /// Decode a reassembled frame: tag parse plus payload dispatch.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnknownTag`] for a tag byte outside the protocol,
    /// otherwise as [`decode`](Self::decode).
    pub fn decode_frame(frame: &Frame) -> Result<Self, TypeError> {
        let tag = BackendTag::from_byte(frame.tag)?;
        Self::decode(tag, &frame.payload)
    }

    /// The frame tag this message arrived under.
    #[must_use]
    pub fn tag(&self) -> BackendTag {
        match self {
            Self::Authentication(_) => BackendTag::Authentication,
            Self::BackendKeyData(_) => BackendTag::BackendKeyData,
            Self::CommandComplete(_) => BackendTag::CommandComplete,
            Self::CopyDone => BackendTag::CopyDone,
            Self::DataRow(_) => BackendTag::DataRow,
            Self::ErrorResponse(_) => BackendTag::ErrorResponse,
            Self::NoData => BackendTag::NoData,
            Self::NoticeResponse(_) => BackendTag::NoticeResponse,
            Self::ParameterStatus(_) => BackendTag::ParameterStatus,
            Self::ReadyForQuery(_) => BackendTag::ReadyForQuery,
            Self::RowDescription(_) => BackendTag::RowDescription,
        }
    }

    /// The event-kind name for this message.
    ///
    /// Authentication messages report their sub-kind (for example
    /// `"AuthenticationMd5Password"`); everything else reports the
    /// message-kind name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Authentication(auth) => auth.kind(),
            other => other.tag().name(),
        }
    }
}
