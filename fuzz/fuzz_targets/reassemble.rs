#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: frame reassembly over arbitrary input bytes.
//
// Catches bugs in:
// - Header parsing at every alignment
// - Declared-length validation (negative, zero, oversized)
// - Leftover calculation for partial trailing frames
// - Cursor arithmetic (no panics, no out-of-bounds slicing)
fuzz_target!(|data: &[u8]| {
    let _ = pgproto_wire::reassemble(data, pgproto_wire::frame::DEFAULT_MAX_PAYLOAD);
});
