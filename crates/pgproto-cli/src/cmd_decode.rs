/// Implementation of `pgproto decode`.
///
/// Runs the full decode pipeline and prints one line per message.
///
/// # Output formats
///
/// ```text
/// ┌─────────┬──────────────────────────────────────────────────────────┐
/// │ Default │ ParameterStatus: server_version = "16.2"                 │
/// │ --json  │ {"kind":"ParameterStatus","name":"server_version",...}   │
/// └─────────┴──────────────────────────────────────────────────────────┘
/// ```
///
/// A trailing partial frame produces a warning on stderr — the decoded
/// messages still print, since a capture cut mid-stream is common and
/// everything before the cut is valid.
use anyhow::{Context, Result};
use pgproto_decoder::MessageDecoder;
use pgproto_types::BackendMessage;
use serde_json::json;

use crate::DecodeArgs;

/// Run the `pgproto decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any frame fails to
/// decode (corrupt envelope, unknown tag, unsupported kind, malformed
/// payload).
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = crate::read_capture(&args.file, args.hex)?;

    let decoded = MessageDecoder::new()
        .decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    for message in &decoded.messages {
        if args.json {
            println!("{}", to_json(message));
        } else {
            println!("{}", describe(message));
        }
    }

    if let Some(rest) = &decoded.leftover {
        eprintln!(
            "warning: capture ends mid-frame ({} byte{} unconsumed)",
            rest.len(),
            if rest.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

// ── Human-readable rendering ──────────────────────────────────────────────────

/// One-line human-readable summary of a message.
fn describe(message: &BackendMessage) -> String {
    match message {
        BackendMessage::Authentication(auth) => render_auth(auth),
        BackendMessage::BackendKeyData(key) => format!(
            "BackendKeyData: process {} secret {}",
            key.process_id, key.secret_key
        ),
        BackendMessage::CommandComplete(done) => format!("CommandComplete: {:?}", done.tag),
        BackendMessage::CopyDone => "CopyDone".to_string(),
        BackendMessage::DataRow(row) => {
            let cells: Vec<String> = row
                .columns
                .iter()
                .map(|c| match c {
                    Some(text) => format!("{text:?}"),
                    None => "NULL".to_string(),
                })
                .collect();
            format!("DataRow: [{}]", cells.join(", "))
        }
        BackendMessage::ErrorResponse(fields) => {
            format!("ErrorResponse: {}", render_fields(fields))
        }
        BackendMessage::NoData => "NoData".to_string(),
        BackendMessage::NoticeResponse(fields) => {
            format!("NoticeResponse: {}", render_fields(fields))
        }
        BackendMessage::ParameterStatus(status) => {
            format!("ParameterStatus: {} = {:?}", status.name, status.value)
        }
        BackendMessage::ReadyForQuery(status) => format!("ReadyForQuery: {status:?}"),
        BackendMessage::RowDescription(desc) => {
            let names: Vec<&str> = desc.fields.iter().map(|f| f.name.as_str()).collect();
            format!(
                "RowDescription: {} field{} [{}]",
                desc.fields.len(),
                if desc.fields.len() == 1 { "" } else { "s" },
                names.join(", ")
            )
        }
    }
}

fn render_auth(auth: &pgproto_types::AuthRequest) -> String {
    match auth {
        pgproto_types::AuthRequest::Ok => "AuthenticationOk".to_string(),
        pgproto_types::AuthRequest::CleartextPassword => {
            "AuthenticationCleartextPassword".to_string()
        }
        pgproto_types::AuthRequest::Md5Password { salt } => format!(
            "AuthenticationMd5Password: salt {}",
            hex::encode(salt)
        ),
    }
}

fn render_fields(fields: &pgproto_types::NoticeFields) -> String {
    let pairs: Vec<String> = fields
        .iter()
        .map(|(code, value)| format!("{}={value:?}", code as char))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

// ── JSON rendering ────────────────────────────────────────────────────────────

/// One JSON object per message. The `kind` key carries the event-kind
/// name; the remaining keys are kind-specific.
fn to_json(message: &BackendMessage) -> serde_json::Value {
    let kind = message.kind();
    match message {
        BackendMessage::Authentication(auth) => match auth {
            pgproto_types::AuthRequest::Md5Password { salt } => {
                json!({ "kind": kind, "salt": hex::encode(salt) })
            }
            _ => json!({ "kind": kind }),
        },
        BackendMessage::BackendKeyData(key) => json!({
            "kind": kind,
            "process_id": key.process_id,
            "secret_key": key.secret_key,
        }),
        BackendMessage::CommandComplete(done) => json!({ "kind": kind, "tag": done.tag }),
        BackendMessage::CopyDone | BackendMessage::NoData => json!({ "kind": kind }),
        BackendMessage::DataRow(row) => json!({ "kind": kind, "columns": row.columns }),
        BackendMessage::ErrorResponse(fields) | BackendMessage::NoticeResponse(fields) => {
            let map: serde_json::Map<String, serde_json::Value> = fields
                .iter()
                .map(|(code, value)| ((code as char).to_string(), json!(value)))
                .collect();
            json!({ "kind": kind, "fields": map })
        }
        BackendMessage::ParameterStatus(status) => json!({
            "kind": kind,
            "name": status.name,
            "value": status.value,
        }),
        BackendMessage::ReadyForQuery(status) => json!({
            "kind": kind,
            "status": (status.byte() as char).to_string(),
        }),
        BackendMessage::RowDescription(desc) => {
            let fields: Vec<serde_json::Value> = desc
                .fields
                .iter()
                .map(|f| {
                    json!({
                        "name": f.name,
                        "table_oid": f.table_oid,
                        "attribute_number": f.attribute_number,
                        "type_oid": f.type_oid,
                        "type_size": f.type_size,
                        "type_modifier": f.type_modifier,
                        "format_code": f.format_code,
                    })
                })
                .collect();
            json!({ "kind": kind, "fields": fields })
        }
    }
}
