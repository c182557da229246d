#![no_main]

use huffpack::compress;
use huffpack::decompress;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // counts above the 16 bit header field are rejected, keep the input in range
    if data.len() > u16::MAX as usize {
        return;
    }
    let packed = match compress(data) {
        Ok(packed) => packed,
        // a full 256 symbol alphabet is over the header limit, rejection is fine
        Err(_) => return,
    };
    let out = decompress(&packed).unwrap();
    assert_eq!(out, data);
});
