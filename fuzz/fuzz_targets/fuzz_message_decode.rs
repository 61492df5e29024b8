#![no_main]

use libfuzzer_sys::fuzz_target;
use lldpscan_core::message::Message;

fuzz_target!(|data: &[u8]| {
    if let Ok(message) = Message::decode(data) {
        // Anything that decodes must encode again.
        let _ = message.to_bytes();
    }
});
