use lldpscan_core::lldp::{
    collect_local, collect_remote, mib, GroupingPolicy, OidTable, TableReconstructor,
};
use lldpscan_core::message::Message;
use lldpscan_core::types::{Oid, Value, VarBind};
use std::fs;
use std::path::Path;

fn fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/golden")
        .join(name);
    let content = fs::read_to_string(&path).expect("fixture must be readable");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace())
        .map(|token| u8::from_str_radix(token, 16).expect("hex byte"))
        .collect()
}

#[test]
fn local_identity_from_get_response() {
    let message = Message::decode(&fixture("v2c_response_lldp_local.hex")).unwrap();
    let table = OidTable::default();
    let local = collect_local(&message.pdu.varbinds, &table);

    assert_eq!(local.get(mib::LOCAL_CHASSIS_ID).unwrap(), "001a2b3c4d5e");
    assert_eq!(local.get(mib::LOCAL_SYSTEM_NAME).unwrap(), "switch-1");
    assert_eq!(local.get(mib::SYSTEM_DESCRIPTION).unwrap(), "Linux switch-1 5.10.0");
    // noSuchInstance / noSuchObject leave the label out.
    assert_eq!(local.get(mib::LOCAL_PORT_DESCRIPTION), None);
    assert_eq!(local.get(mib::SYSTEM_VENDOR), None);
}

#[test]
fn neighbors_from_bulk_response() {
    let message = Message::decode(&fixture("v2c_bulk_response_lldp_remote.hex")).unwrap();
    let table = OidTable::default();
    let mut reconstructor = TableReconstructor::new(&table, GroupingPolicy::IndexSuffix);
    let remote = reconstructor.remote(&message.pdu.varbinds);

    assert_eq!(remote.len(), 2);
    assert_eq!(remote[0].index.to_string(), "0.1.1");
    assert_eq!(remote[0].get(mib::REMOTE_CHASSIS_ID).unwrap(), "001122334455");
    assert_eq!(remote[0].get(mib::REMOTE_PORT_ID).unwrap(), "Gi0/1");
    assert_eq!(remote[0].get(mib::REMOTE_SYSTEM_NAME).unwrap(), "core-a");
    assert_eq!(remote[0].get(mib::REMOTE_SYSTEM_CAPABILITIES).unwrap(), "2800");
    assert_eq!(remote[0].get(mib::REMOTE_MANAGEMENT_ADDRESS).unwrap(), "2");
    assert_eq!(remote[1].index.to_string(), "0.2.2");
    assert_eq!(remote[1].get(mib::REMOTE_CHASSIS_ID).unwrap(), "0066778899aa");
    assert_eq!(remote[1].get(mib::REMOTE_MANAGEMENT_ADDRESS), None);
    // lldpRemManAddrIfSubtype (column 3) is not mapped.
    assert_eq!(reconstructor.unmapped(), 1);
}

#[test]
fn completion_grouping_keeps_partial_neighbors() {
    let message = Message::decode(&fixture("v2c_bulk_response_lldp_remote.hex")).unwrap();
    let mut profile = lldpscan_core::lldp::TableProfile::lldp();
    profile.required = Some(vec![
        mib::REMOTE_CHASSIS_ID.to_string(),
        mib::REMOTE_PORT_ID.to_string(),
    ]);
    let table = OidTable::new(&profile);

    // A column-major walk interleaves neighbors, so completion grouping
    // closes the first record on 0.1.1's port after 0.2.2's chassis replaced
    // the chassis ID.
    let remote = collect_remote(&message.pdu.varbinds, &table, GroupingPolicy::Completion);
    assert_eq!(remote.len(), 2);
    assert_eq!(remote[0].index.to_string(), "0.1.1");
    assert_eq!(remote[0].get(mib::REMOTE_CHASSIS_ID).unwrap(), "0066778899aa");
    assert_eq!(remote[0].get(mib::REMOTE_PORT_ID).unwrap(), "Gi0/1");
    assert_eq!(remote[1].index.to_string(), "0.2.2");
    assert_eq!(remote[1].get(mib::REMOTE_CHASSIS_ID), None);
    assert_eq!(remote[1].get(mib::REMOTE_SYSTEM_NAME).unwrap(), "core-b");
}

#[test]
fn row_major_cells_group_identically_under_both_policies() {
    let table = OidTable::default();
    let columns = [
        (mib::LLDP_REM_CHASSIS_ID, Value::OctetString(vec![0xaa, 0xbb, 0xcc, 0, 1, 2])),
        (mib::LLDP_REM_PORT_ID, Value::from("eth0")),
        (mib::LLDP_REM_PORT_DESC, Value::from("uplink")),
        (mib::LLDP_REM_SYS_NAME, Value::from("peer")),
        (mib::LLDP_REM_SYS_CAP_ENABLED, Value::OctetString(vec![0x00, 0x04])),
        (mib::LLDP_REM_MAN_ADDR_IF_ID, Value::Integer(2)),
    ];
    let mut cells = Vec::new();
    for neighbor in 1..=2u32 {
        for (column, value) in &columns {
            let mut arcs = column.to_vec();
            arcs.extend([0, neighbor, 1]);
            cells.push(VarBind::new(Oid::new(arcs), value.clone()));
        }
    }

    let by_index = collect_remote(&cells, &table, GroupingPolicy::IndexSuffix);
    let by_completion = collect_remote(&cells, &table, GroupingPolicy::Completion);
    assert_eq!(by_index, by_completion);
    assert_eq!(by_index.len(), 2);
    assert_eq!(by_index[1].get(mib::REMOTE_SYSTEM_CAPABILITIES).unwrap(), "0004");
}
