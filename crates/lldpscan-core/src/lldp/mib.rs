//! Object identifiers from IEEE 802.1AB LLDP-MIB and MIB-II used by the
//! default profile.

pub const LLDP_LOC_CHASSIS_ID: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 3, 2, 0];
pub const LLDP_LOC_SYS_NAME: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 3, 3, 0];
pub const LLDP_LOC_PORT_DESC: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 3, 7, 1, 3];
pub const SYS_DESCR: &[u32] = &[1, 3, 6, 1, 2, 1, 1, 1, 0];
pub const NET_SNMP_VENDOR: &[u32] = &[1, 3, 6, 1, 4, 1, 8072, 3, 2, 10];

/// lldpRemTable.
pub const LLDP_REM_TABLE: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 1];
/// lldpRemManAddrTable, which augments lldpRemTable rows.
pub const LLDP_REM_MAN_ADDR_TABLE: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 2];

pub const LLDP_REM_CHASSIS_ID: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 1, 1, 5];
pub const LLDP_REM_PORT_ID: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 1, 1, 7];
pub const LLDP_REM_PORT_DESC: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 1, 1, 8];
pub const LLDP_REM_SYS_NAME: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 1, 1, 9];
/// lldpRemSysCapEnabled.
pub const LLDP_REM_SYS_CAP_ENABLED: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 1, 1, 12];
/// lldpRemManAddrIfId. The management address itself is encoded in the
/// index, after the three lldpRemTable index arcs.
pub const LLDP_REM_MAN_ADDR_IF_ID: &[u32] = &[1, 0, 8802, 1, 1, 2, 1, 4, 2, 1, 4];

/// lldpRemTimeMark, lldpRemLocalPortNum, lldpRemIndex.
pub const LLDP_REM_INDEX_LEN: usize = 3;

pub const LOCAL_CHASSIS_ID: &str = "Local Chassis ID";
pub const LOCAL_SYSTEM_NAME: &str = "Local System Name";
pub const LOCAL_PORT_DESCRIPTION: &str = "Local Port Description";
pub const SYSTEM_DESCRIPTION: &str = "System Description";
pub const SYSTEM_VENDOR: &str = "System Vendor";

pub const REMOTE_CHASSIS_ID: &str = "Remote Chassis ID";
pub const REMOTE_PORT_ID: &str = "Remote Port ID";
pub const REMOTE_PORT_DESCRIPTION: &str = "Remote Port Description";
pub const REMOTE_SYSTEM_NAME: &str = "Remote System Name";
pub const REMOTE_SYSTEM_CAPABILITIES: &str = "Remote System Capabilities";
pub const REMOTE_MANAGEMENT_ADDRESS: &str = "Remote Management Address";
