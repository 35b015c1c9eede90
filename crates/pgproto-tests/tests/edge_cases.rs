//! Edge case integration tests for the pgproto decoder.
//!
//! Four categories of input must fail loudly rather than limp along:
//!
//! - **Capability gaps**: documented message kinds and authentication
//!   codes without a field decoder are fatal errors, never silent skips —
//!   a caller that misses a COPY response would deadlock the session.
//!
//! - **Unknown bytes**: tags outside the documented protocol mean the
//!   stream is desynchronized; decoding anything after that point would
//!   be garbage.
//!
//! - **Corrupt declared lengths**: negative, impossibly small, or
//!   absurdly large length prefixes would otherwise read as "wait for
//!   more bytes" and stall the connection forever.
//!
//! - **Malformed payloads**: truncated sub-fields, missing terminators,
//!   invalid column lengths, and unrecognized status bytes.

use pgproto_decoder::{DecodeError, MessageDecoder};
use pgproto_tests::capture;
use pgproto_types::{BackendTag, TypeError};
use pgproto_wire::WireError;

fn decode_err(bytes: &[u8]) -> DecodeError {
    MessageDecoder::new()
        .decode(bytes)
        .expect_err("decode should fail")
}

// ── Capability gaps ───────────────────────────────────────────────────────────

#[test]
fn every_unimplemented_tag_fails_as_unsupported() {
    for byte in *b"123AdGHIstVW" {
        let bytes = capture::frame(byte, &[]);
        let err = decode_err(&bytes);
        assert!(
            matches!(
                &err,
                DecodeError::Type(TypeError::UnsupportedMessage { tag })
                    if tag.byte() == byte
            ),
            "tag {:?} should be a fatal capability gap, got {err:?}",
            byte as char
        );
    }
}

#[test]
fn function_call_response_is_not_a_silent_no_op() {
    // The regression the exhaustive dispatch exists to prevent: a valid
    // stream with one unsupported frame must fail, not yield 2 messages.
    let mut bytes = capture::copy_done();
    bytes.extend_from_slice(&capture::frame(b'V', &(-1i32).to_be_bytes()));
    bytes.extend_from_slice(&capture::ready_for_query(b'I'));

    let err = decode_err(&bytes);
    assert!(matches!(
        err,
        DecodeError::Type(TypeError::UnsupportedMessage {
            tag: BackendTag::FunctionCallResponse
        })
    ));
}

#[test]
fn unsupported_auth_codes_fail() {
    for code in [2, 6, 7, 8, 9, 11, 42] {
        let bytes = capture::authentication(code, &[]);
        let err = decode_err(&bytes);
        assert!(
            matches!(
                err,
                DecodeError::Type(TypeError::UnsupportedAuthentication { code: c }) if c == code
            ),
            "auth code {code} should be unsupported"
        );
    }
}

// ── Unknown bytes ─────────────────────────────────────────────────────────────

#[test]
fn unknown_tag_is_fatal() {
    let bytes = capture::frame(b'q', &[]);
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::UnknownTag { byte: b'q' })
    ));
}

// ── Corrupt declared lengths ──────────────────────────────────────────────────

#[test]
fn negative_declared_length_fails_fast() {
    let mut bytes = vec![b'D'];
    bytes.extend_from_slice(&(-5i32).to_be_bytes());
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Wire(WireError::InvalidLength { length: -5, .. })
    ));
}

#[test]
fn zero_declared_length_fails_fast() {
    let mut bytes = vec![b'Z'];
    bytes.extend_from_slice(&0i32.to_be_bytes());
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Wire(WireError::InvalidLength { length: 0, .. })
    ));
}

#[test]
fn oversized_declared_length_fails_fast() {
    let mut bytes = vec![b'D'];
    bytes.extend_from_slice(&i32::MAX.to_be_bytes());
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Wire(WireError::FrameTooLarge { .. })
    ));
}

#[test]
fn configured_limit_is_respected() {
    let long_value = "x".repeat(1000);
    let bytes = capture::data_row(&[Some(long_value.as_str())]);
    let result = MessageDecoder::with_max_payload(100).decode(&bytes);
    assert!(matches!(
        result,
        Err(DecodeError::Wire(WireError::FrameTooLarge { max: 100, .. }))
    ));

    // The same capture is fine under the default limit.
    assert!(MessageDecoder::new().decode(&bytes).is_ok());
}

// ── Malformed payloads ────────────────────────────────────────────────────────

#[test]
fn truncated_key_data_fails() {
    let bytes = capture::frame(b'K', &[0, 0, 0, 1]); // one i32 short
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::Truncated { .. })
    ));
}

#[test]
fn data_row_with_invalid_negative_length_fails() {
    let mut payload = 1u16.to_be_bytes().to_vec();
    payload.extend_from_slice(&(-2i32).to_be_bytes());
    let bytes = capture::frame(b'D', &payload);
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::InvalidColumnLength { length: -2 })
    ));
}

#[test]
fn data_row_declaring_more_columns_than_present_fails() {
    let mut payload = 3u16.to_be_bytes().to_vec();
    payload.extend_from_slice(&1i32.to_be_bytes());
    payload.push(b'x');
    let bytes = capture::frame(b'D', &payload);
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::Truncated { .. })
    ));
}

#[test]
fn command_tag_without_terminator_fails() {
    let bytes = capture::frame(b'C', b"SELECT 1");
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::UnterminatedString { .. })
    ));
}

#[test]
fn error_response_without_closing_null_fails() {
    let bytes = capture::frame(b'E', b"SERROR\0");
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::Truncated { .. })
    ));
}

#[test]
fn unknown_transaction_status_fails() {
    let bytes = capture::ready_for_query(b'?');
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::UnknownTransactionStatus { byte: b'?' })
    ));
}

#[test]
fn non_utf8_column_value_fails() {
    let mut payload = 1u16.to_be_bytes().to_vec();
    payload.extend_from_slice(&2i32.to_be_bytes());
    payload.extend_from_slice(&[0xFF, 0xFE]);
    let bytes = capture::frame(b'D', &payload);
    assert!(matches!(
        decode_err(&bytes),
        DecodeError::Type(TypeError::InvalidUtf8 { .. })
    ));
}

#[test]
fn unknown_error_field_codes_are_kept_not_fatal() {
    // Unknown KEY CODES inside an error payload are data, not errors —
    // contrast with unknown frame tags, which are fatal.
    let bytes = capture::error_response(&[(b'S', "ERROR"), (b'Z', "zebra")]);
    let decoded = MessageDecoder::new().decode(&bytes).unwrap();

    let pgproto_types::BackendMessage::ErrorResponse(fields) = &decoded.messages[0] else {
        panic!("expected ErrorResponse");
    };
    assert_eq!(fields.get(b'Z'), Some("zebra"));
}
