//! Backend-frame builders.
//!
//! Each function returns the exact wire bytes the backend would send for
//! one message, ready to be concatenated into a capture. The builders
//! intentionally mirror the payload layouts the decoders consume, so a
//! test that fails here points at a real disagreement about the format.

use pgproto_types::FieldDescriptor;

/// Wrap a payload in the frame envelope: tag + length (counts itself,
/// excludes the tag) + payload.
#[must_use]
pub fn frame(tag: u8, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5 + payload.len());
    buf.push(tag);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    buf.extend_from_slice(&((payload.len() as i32) + 4).to_be_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// An authentication frame with an arbitrary sub-type code and trailing
/// payload bytes. The specific builders below cover the supported codes.
#[must_use]
pub fn authentication(code: i32, rest: &[u8]) -> Vec<u8> {
    let mut payload = code.to_be_bytes().to_vec();
    payload.extend_from_slice(rest);
    frame(b'R', &payload)
}

#[must_use]
pub fn authentication_ok() -> Vec<u8> {
    authentication(0, &[])
}

#[must_use]
pub fn authentication_cleartext() -> Vec<u8> {
    authentication(3, &[])
}

#[must_use]
pub fn authentication_md5(salt: [u8; 4]) -> Vec<u8> {
    authentication(5, &salt)
}

#[must_use]
pub fn backend_key_data(process_id: i32, secret_key: i32) -> Vec<u8> {
    let mut payload = process_id.to_be_bytes().to_vec();
    payload.extend_from_slice(&secret_key.to_be_bytes());
    frame(b'K', &payload)
}

#[must_use]
pub fn command_complete(tag: &str) -> Vec<u8> {
    let mut payload = tag.as_bytes().to_vec();
    payload.push(0);
    frame(b'C', &payload)
}

#[must_use]
pub fn copy_done() -> Vec<u8> {
    frame(b'c', &[])
}

#[must_use]
pub fn no_data() -> Vec<u8> {
    frame(b'n', &[])
}

/// A DataRow frame; `None` encodes the NULL marker (-1 length, no bytes).
#[must_use]
pub fn data_row(columns: &[Option<&str>]) -> Vec<u8> {
    #[allow(clippy::cast_possible_truncation)]
    let mut payload = (columns.len() as u16).to_be_bytes().to_vec();
    for column in columns {
        match column {
            Some(text) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                payload.extend_from_slice(&(text.len() as i32).to_be_bytes());
                payload.extend_from_slice(text.as_bytes());
            }
            None => payload.extend_from_slice(&(-1i32).to_be_bytes()),
        }
    }
    frame(b'D', &payload)
}

/// The shared key-coded payload of error and notice frames.
fn key_coded(pairs: &[(u8, &str)]) -> Vec<u8> {
    let mut payload = Vec::new();
    for (code, value) in pairs {
        payload.push(*code);
        payload.extend_from_slice(value.as_bytes());
        payload.push(0);
    }
    payload.push(0); // closing null for the whole sequence
    payload
}

#[must_use]
pub fn error_response(pairs: &[(u8, &str)]) -> Vec<u8> {
    frame(b'E', &key_coded(pairs))
}

#[must_use]
pub fn notice_response(pairs: &[(u8, &str)]) -> Vec<u8> {
    frame(b'N', &key_coded(pairs))
}

#[must_use]
pub fn parameter_status(name: &str, value: &str) -> Vec<u8> {
    let mut payload = name.as_bytes().to_vec();
    payload.push(0);
    payload.extend_from_slice(value.as_bytes());
    payload.push(0);
    frame(b'S', &payload)
}

#[must_use]
pub fn ready_for_query(status: u8) -> Vec<u8> {
    frame(b'Z', &[status])
}

#[must_use]
pub fn row_description(fields: &[FieldDescriptor]) -> Vec<u8> {
    #[allow(clippy::cast_possible_truncation)]
    let mut payload = (fields.len() as u16).to_be_bytes().to_vec();
    for field in fields {
        payload.extend_from_slice(field.name.as_bytes());
        payload.push(0);
        payload.extend_from_slice(&field.table_oid.to_be_bytes());
        payload.extend_from_slice(&field.attribute_number.to_be_bytes());
        payload.extend_from_slice(&field.type_oid.to_be_bytes());
        payload.extend_from_slice(&field.type_size.to_be_bytes());
        payload.extend_from_slice(&field.type_modifier.to_be_bytes());
        payload.extend_from_slice(&field.format_code.to_be_bytes());
    }
    frame(b'T', &payload)
}

/// A plausible query exchange: row shape, two rows, completion, ready.
///
/// Used by the fragmentation tests and benches as a multi-frame capture
/// with varied payload sizes.
#[must_use]
pub fn sample_query_exchange() -> Vec<u8> {
    let mut bytes = row_description(&[
        FieldDescriptor {
            name: "id".to_string(),
            table_oid: 16384,
            attribute_number: 1,
            type_oid: 23,
            type_size: 4,
            type_modifier: -1,
            format_code: 0,
        },
        FieldDescriptor {
            name: "name".to_string(),
            table_oid: 16384,
            attribute_number: 2,
            type_oid: 25,
            type_size: -1,
            type_modifier: -1,
            format_code: 0,
        },
    ]);
    bytes.extend_from_slice(&data_row(&[Some("1"), Some("ada")]));
    bytes.extend_from_slice(&data_row(&[Some("2"), None]));
    bytes.extend_from_slice(&command_complete("SELECT 2"));
    bytes.extend_from_slice(&ready_for_query(b'I'));
    bytes
}
