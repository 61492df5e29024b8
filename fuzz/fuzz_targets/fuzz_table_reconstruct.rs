#![no_main]

use libfuzzer_sys::fuzz_target;
use lldpscan_core::lldp::{collect_local, collect_remote, GroupingPolicy, OidTable};
use lldpscan_core::message::Message;

fuzz_target!(|data: &[u8]| {
    let Ok(message) = Message::decode(data) else {
        return;
    };
    let table = OidTable::default();
    let cells = &message.pdu.varbinds;
    let _ = collect_local(cells, &table);
    for policy in [GroupingPolicy::IndexSuffix, GroupingPolicy::Completion] {
        let records = collect_remote(cells, &table, policy);
        assert!(records.iter().all(|r| !r.fields.is_empty()));
    }
});
