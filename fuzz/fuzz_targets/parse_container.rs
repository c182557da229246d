#![no_main]

use huffpack::decompress;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // arbitrary bytes either decode or error, the decoder must never panic
    let _ = decompress(data);
});
