use crate::lldp::mib;
use crate::types::Oid;
use alloc::string::String;
use alloc::vec::Vec;

/// One OID paired with the label it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelBinding {
    pub oid: Oid,
    pub label: String,
}

impl LabelBinding {
    pub fn new(oid: Oid, label: impl Into<String>) -> Self {
        Self {
            oid,
            label: label.into(),
        }
    }

    fn from_static(arcs: &[u32], label: &str) -> Self {
        Self::new(Oid::from_slice(arcs), label)
    }
}

/// The identifiers to poll and how to label them.
///
/// A profile is plain data; compile it into an [`OidTable`] for lookups.
/// With the `serde` feature a profile can be loaded from JSON, e.g.
///
/// ```json
/// {
///   "local": [{ "oid": "1.3.6.1.2.1.1.5.0", "label": "sysName" }],
///   "remote_roots": ["1.0.8802.1.1.2.1.4.1"],
///   "remote_columns": [{ "oid": "1.0.8802.1.1.2.1.4.1.1.9", "label": "Neighbor" }],
///   "index_len": 3
/// }
/// ```
///
/// [`OidTable`]: crate::lldp::OidTable
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableProfile {
    /// Scalars fetched with a single get, matched by exact OID.
    pub local: Vec<LabelBinding>,
    /// Subtrees walked for remote rows.
    pub remote_roots: Vec<Oid>,
    /// Column prefixes, matched against walked cells by longest prefix.
    pub remote_columns: Vec<LabelBinding>,
    /// Leading index arcs that identify a row. `None` keeps the full suffix.
    #[cfg_attr(feature = "serde", serde(default))]
    pub index_len: Option<usize>,
    /// Labels that complete a record under completion grouping. `None`
    /// means every remote column label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: Option<Vec<String>>,
}

impl TableProfile {
    /// The LLDP-MIB neighbor table plus system identity scalars.
    pub fn lldp() -> Self {
        Self {
            local: Vec::from([
                LabelBinding::from_static(mib::LLDP_LOC_CHASSIS_ID, mib::LOCAL_CHASSIS_ID),
                LabelBinding::from_static(mib::LLDP_LOC_SYS_NAME, mib::LOCAL_SYSTEM_NAME),
                LabelBinding::from_static(mib::LLDP_LOC_PORT_DESC, mib::LOCAL_PORT_DESCRIPTION),
                LabelBinding::from_static(mib::SYS_DESCR, mib::SYSTEM_DESCRIPTION),
                LabelBinding::from_static(mib::NET_SNMP_VENDOR, mib::SYSTEM_VENDOR),
            ]),
            remote_roots: Vec::from([
                Oid::from_slice(mib::LLDP_REM_TABLE),
                Oid::from_slice(mib::LLDP_REM_MAN_ADDR_TABLE),
            ]),
            remote_columns: Vec::from([
                LabelBinding::from_static(mib::LLDP_REM_CHASSIS_ID, mib::REMOTE_CHASSIS_ID),
                LabelBinding::from_static(mib::LLDP_REM_PORT_ID, mib::REMOTE_PORT_ID),
                LabelBinding::from_static(mib::LLDP_REM_PORT_DESC, mib::REMOTE_PORT_DESCRIPTION),
                LabelBinding::from_static(mib::LLDP_REM_SYS_NAME, mib::REMOTE_SYSTEM_NAME),
                LabelBinding::from_static(
                    mib::LLDP_REM_SYS_CAP_ENABLED,
                    mib::REMOTE_SYSTEM_CAPABILITIES,
                ),
                LabelBinding::from_static(
                    mib::LLDP_REM_MAN_ADDR_IF_ID,
                    mib::REMOTE_MANAGEMENT_ADDRESS,
                ),
            ]),
            index_len: Some(mib::LLDP_REM_INDEX_LEN),
            required: None,
        }
    }

    pub fn local_oids(&self) -> Vec<Oid> {
        self.local.iter().map(|binding| binding.oid.clone()).collect()
    }
}

impl Default for TableProfile {
    fn default() -> Self {
        Self::lldp()
    }
}
