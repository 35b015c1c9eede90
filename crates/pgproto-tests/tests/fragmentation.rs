//! Fragmentation tests: decoding must be invariant to how the transport
//! splits the byte stream.
//!
//! The transport may deliver a capture in any number of chunks cut at any
//! byte positions. The contract is that a caller who concatenates each
//! call's leftover with the next chunk sees exactly the messages a
//! whole-buffer decode would produce — same count, same order, same field
//! values — no matter where the cuts fall.

use pgproto_decoder::{DecodedChunk, MessageDecoder};
use pgproto_tests::capture;
use pgproto_types::BackendMessage;

/// Decode a capture in two pieces split at `k`, threading the leftover.
fn decode_split(bytes: &[u8], k: usize) -> Vec<BackendMessage> {
    let decoder = MessageDecoder::new();

    let DecodedChunk {
        mut messages,
        leftover,
    } = decoder.decode(&bytes[..k]).expect("first chunk failed");

    let mut second = leftover.unwrap_or_default();
    second.extend_from_slice(&bytes[k..]);
    let rest = decoder.decode(&second).expect("second chunk failed");

    assert!(
        rest.leftover.is_none(),
        "complete capture must leave nothing at split {k}"
    );
    messages.extend(rest.messages);
    messages
}

#[test]
fn every_split_point_yields_identical_messages() {
    let bytes = capture::sample_query_exchange();
    let whole = MessageDecoder::new().decode(&bytes).unwrap().messages;

    for k in 0..=bytes.len() {
        let split = decode_split(&bytes, k);
        assert_eq!(split, whole, "split at byte {k} changed the result");
    }
}

#[test]
fn byte_at_a_time_feeding_reaches_the_same_result() {
    let bytes = capture::sample_query_exchange();
    let whole = MessageDecoder::new().decode(&bytes).unwrap().messages;

    let decoder = MessageDecoder::new();
    let mut carry: Vec<u8> = Vec::new();
    let mut messages = Vec::new();

    for &byte in &bytes {
        carry.push(byte);
        let decoded = decoder.decode(&carry).unwrap();
        messages.extend(decoded.messages);
        carry = decoded.leftover.unwrap_or_default();
    }

    assert!(carry.is_empty());
    assert_eq!(messages, whole);
}

#[test]
fn three_bytes_come_back_unchanged() {
    // Below the 5-byte minimum header: zero frames, input returned as-is.
    let bytes = [b'D', 0x00, 0x00];
    let decoded = MessageDecoder::new().decode(&bytes).unwrap();
    assert!(decoded.messages.is_empty());
    assert_eq!(decoded.leftover, Some(bytes.to_vec()));
}

#[test]
fn header_split_does_not_consume_the_header() {
    let bytes = capture::command_complete("SELECT 1");

    // Cut inside the 5-byte header: everything comes back as leftover.
    let decoded = MessageDecoder::new().decode(&bytes[..4]).unwrap();
    assert!(decoded.messages.is_empty());
    assert_eq!(decoded.leftover, Some(bytes[..4].to_vec()));
}

#[test]
fn payload_split_keeps_header_in_leftover() {
    let bytes = capture::command_complete("SELECT 1");

    // Cut inside the payload: leftover starts at the tag byte so the
    // header is re-read against the longer buffer next call.
    let cut = 7;
    let decoded = MessageDecoder::new().decode(&bytes[..cut]).unwrap();
    assert!(decoded.messages.is_empty());
    assert_eq!(decoded.leftover, Some(bytes[..cut].to_vec()));
}

#[test]
fn leftover_spanning_multiple_chunks() {
    // A frame delivered in three chunks, none of which completes it.
    let bytes = capture::data_row(&[Some("some longer column value")]);
    let decoder = MessageDecoder::new();

    let first = decoder.decode(&bytes[..6]).unwrap();
    assert!(first.messages.is_empty());

    let mut carry = first.leftover.unwrap();
    carry.extend_from_slice(&bytes[6..20]);
    let second = decoder.decode(&carry).unwrap();
    assert!(second.messages.is_empty());

    let mut carry = second.leftover.unwrap();
    carry.extend_from_slice(&bytes[20..]);
    let third = decoder.decode(&carry).unwrap();
    assert_eq!(third.messages.len(), 1);
    assert!(third.leftover.is_none());
}

#[test]
fn independent_streams_do_not_interfere() {
    // Two interleaved decodes sharing one decoder value: state lives in
    // the leftover each caller threads, not in the decoder.
    let decoder = MessageDecoder::new();
    let a = capture::parameter_status("TimeZone", "UTC");
    let b = capture::ready_for_query(b'T');

    let a1 = decoder.decode(&a[..8]).unwrap();
    let b1 = decoder.decode(&b[..2]).unwrap();

    let mut a_carry = a1.leftover.unwrap();
    a_carry.extend_from_slice(&a[8..]);
    let mut b_carry = b1.leftover.unwrap();
    b_carry.extend_from_slice(&b[2..]);

    let a2 = decoder.decode(&a_carry).unwrap();
    let b2 = decoder.decode(&b_carry).unwrap();

    assert_eq!(a2.messages.len(), 1);
    assert_eq!(b2.messages.len(), 1);
    assert_eq!(a2.messages[0].kind(), "ParameterStatus");
    assert_eq!(b2.messages[0].kind(), "ReadyForQuery");
}
