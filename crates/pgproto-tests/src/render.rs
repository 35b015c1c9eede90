//! Stable one-line rendering of decoded messages.
//!
//! Snapshot tests assert against these strings, so the formats here are
//! deliberately boring and must stay byte-stable.

use pgproto_types::{AuthRequest, BackendMessage, NoticeFields};

/// Render a decoded message as one line of plain text.
#[must_use]
pub fn render(message: &BackendMessage) -> String {
    match message {
        BackendMessage::Authentication(AuthRequest::Md5Password { salt }) => {
            format!("AuthenticationMd5Password salt={}", hex::encode(salt))
        }
        BackendMessage::Authentication(auth) => auth.kind().to_string(),
        BackendMessage::BackendKeyData(key) => {
            format!("BackendKeyData pid={} secret={}", key.process_id, key.secret_key)
        }
        BackendMessage::CommandComplete(done) => format!("CommandComplete {:?}", done.tag),
        BackendMessage::CopyDone => "CopyDone".to_string(),
        BackendMessage::DataRow(row) => {
            let cells: Vec<String> = row
                .columns
                .iter()
                .map(|c| c.as_ref().map_or_else(|| "NULL".to_string(), |v| format!("{v:?}")))
                .collect();
            format!("DataRow [{}]", cells.join(", "))
        }
        BackendMessage::ErrorResponse(fields) => {
            format!("ErrorResponse {}", render_fields(fields))
        }
        BackendMessage::NoData => "NoData".to_string(),
        BackendMessage::NoticeResponse(fields) => {
            format!("NoticeResponse {}", render_fields(fields))
        }
        BackendMessage::ParameterStatus(status) => {
            format!("ParameterStatus {}={:?}", status.name, status.value)
        }
        BackendMessage::ReadyForQuery(status) => format!("ReadyForQuery {status:?}"),
        BackendMessage::RowDescription(desc) => {
            let names: Vec<&str> = desc.fields.iter().map(|f| f.name.as_str()).collect();
            format!("RowDescription [{}]", names.join(", "))
        }
    }
}

/// `{ C="42601", M="syntax error", S="ERROR" }` — code-ordered pairs.
fn render_fields(fields: &NoticeFields) -> String {
    let pairs: Vec<String> = fields
        .iter()
        .map(|(code, value)| format!("{}={value:?}", code as char))
        .collect();
    format!("{{ {} }}", pairs.join(", "))
}
