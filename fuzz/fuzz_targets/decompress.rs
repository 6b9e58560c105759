#![no_main]

use libfuzzer_sys::fuzz_target;

use bitpress::fuzz::harness_decompress;

fuzz_target!(|data: &[u8]| harness_decompress(data));
