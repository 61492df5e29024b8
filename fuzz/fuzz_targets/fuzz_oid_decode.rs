#![no_main]

use libfuzzer_sys::fuzz_target;
use lldpscan_core::encoding::primitives::{decode_oid, oid_content};

fuzz_target!(|data: &[u8]| {
    if let Ok(oid) = decode_oid(data) {
        if let Ok(content) = oid_content(&oid) {
            assert_eq!(decode_oid(&content).ok(), Some(oid));
        }
    }
});
