#![no_main]

use libfuzzer_sys::fuzz_target;

use bitpress::fuzz::{harness, FuzzCase};

fuzz_target!(|data: FuzzCase| harness(data));
