#![no_main]

use dlog_proof::{Proof, Secp256k1};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = text.parse::<Proof<Secp256k1>>();
    }
});
