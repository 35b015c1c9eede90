#![no_main]

use libfuzzer_sys::fuzz_target;
use pgproto_decoder::MessageDecoder;

// Fuzz target: full chunk decoder entry point.
//
// Calls `MessageDecoder::decode(data)` on arbitrary input bytes.
// Catches bugs in:
// - Frame reassembly
// - Tag dispatch (unknown and unsupported tags)
// - Authentication sub-dispatch
// - Every field decoder's cursor handling
fuzz_target!(|data: &[u8]| {
    let _ = MessageDecoder::new().decode(data);
});
