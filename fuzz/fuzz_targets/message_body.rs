#![no_main]

use libfuzzer_sys::fuzz_target;
use pgproto_types::{BackendMessage, BackendTag};

// Fuzz target: per-kind payload decoders, bypassing the frame envelope.
//
// The first input byte picks the tag; the rest is the payload. This
// reaches payload shapes the envelope fuzzer rarely constructs (e.g.
// huge column counts against tiny payloads).
fuzz_target!(|input: (u8, &[u8])| {
    let (tag_byte, payload) = input;
    if let Ok(tag) = BackendTag::from_byte(tag_byte) {
        let _ = BackendMessage::decode(tag, payload);
    }
});
