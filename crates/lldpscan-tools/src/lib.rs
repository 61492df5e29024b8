use clap::ValueEnum;
use lldpscan_client::{SessionConfig, SimulatedAgent, TargetReport, TargetSpec};
use lldpscan_core::lldp::{mib, GroupingPolicy, TableProfile};
use lldpscan_core::message::SnmpVersion;
use lldpscan_core::types::{Oid, Value, VarBind};
use log::warn;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Column names of the output file.
pub const OUTPUT_HEADER: [&str; 6] = ["Type", "Target", "Neighbor", "Index", "Description", "Value"];

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI-friendly SNMP protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VersionArg {
    V1,
    V2c,
}

impl VersionArg {
    pub const fn into_version(self) -> SnmpVersion {
        match self {
            Self::V1 => SnmpVersion::V1,
            Self::V2c => SnmpVersion::V2c,
        }
    }
}

/// CLI-friendly remote row grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupingArg {
    /// One neighbor per row index.
    IndexSuffix,
    /// Close a neighbor once every required column was seen.
    Completion,
}

impl GroupingArg {
    pub const fn into_policy(self) -> GroupingPolicy {
        match self {
            Self::IndexSuffix => GroupingPolicy::IndexSuffix,
            Self::Completion => GroupingPolicy::Completion,
        }
    }
}

/// Session settings shared by every binary.
pub fn session_config(
    version: VersionArg,
    timeout_secs: u64,
    retries: u32,
    max_repetitions: u32,
) -> SessionConfig {
    SessionConfig {
        version: version.into_version(),
        timeout: Duration::from_secs(timeout_secs.max(1)),
        retries,
        max_repetitions: max_repetitions.max(1),
    }
}

/// Reads `target,community[,...]` rows. There is no header row; rows with
/// fewer than two fields are skipped with a warning.
pub fn read_targets<R: Read>(reader: R) -> Result<Vec<TargetSpec>, ToolError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut targets = Vec::new();
    for record in csv.records() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(target), Some(community)) if !target.is_empty() => {
                targets.push(TargetSpec::new(target, community));
            }
            _ => warn!("skipping invalid record: {:?}", record.iter().collect::<Vec<_>>()),
        }
    }
    Ok(targets)
}

pub fn read_targets_file(path: &Path) -> Result<Vec<TargetSpec>, ToolError> {
    read_targets(BufReader::new(File::open(path)?))
}

/// Writes one `Local` row per local field and one `Remote` row per neighbor
/// field, targets in report order. Values are written byte for byte.
pub fn write_reports<W: Write>(writer: W, reports: &[TargetReport]) -> Result<(), ToolError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(OUTPUT_HEADER)?;
    for report in reports {
        let target = report.target.as_bytes();
        let empty = &b""[..];
        for (label, value) in report.local.fields.iter() {
            csv.write_record([
                &b"Local"[..],
                target,
                empty,
                empty,
                label.as_bytes(),
                value.as_bytes(),
            ])?;
        }
        for (n, neighbor) in report.remote.iter().enumerate() {
            let ordinal = (n + 1).to_string();
            let index = neighbor.index.to_string();
            for (label, value) in neighbor.fields.iter() {
                csv.write_record([
                    &b"Remote"[..],
                    target,
                    ordinal.as_bytes(),
                    index.as_bytes(),
                    label.as_bytes(),
                    value.as_bytes(),
                ])?;
            }
        }
    }
    csv.flush()?;
    Ok(())
}

pub fn write_reports_json<W: Write>(mut writer: W, reports: &[TargetReport]) -> Result<(), ToolError> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writeln!(writer)?;
    Ok(())
}

/// Loads a JSON [`TableProfile`].
pub fn load_profile(path: &Path) -> Result<TableProfile, ToolError> {
    let profile = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Ok(profile)
}

/// A decoded cell as printed by the query tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub oid: String,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub value: String,
}

impl From<&VarBind> for CellView {
    fn from(cell: &VarBind) -> Self {
        Self {
            oid: cell.oid.to_string(),
            type_name: cell.value.type_name(),
            value: cell.decoded().into(),
        }
    }
}

pub fn print_cells(cells: &[VarBind], json: bool) -> Result<(), ToolError> {
    let views: Vec<CellView> = cells.iter().map(CellView::from).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &views)?;
        writeln!(out)?;
    } else {
        for view in &views {
            writeln!(out, "{} = {}: {}", view.oid, view.type_name, view.value)?;
        }
    }
    Ok(())
}

/// A switch with `neighbors` LLDP neighbors, served by the `lldpsim` tool.
pub fn demo_switch(community: &str, name: &str, neighbors: u32) -> SimulatedAgent {
    let scalar = |arcs: &[u32]| Oid::from_slice(arcs);
    let cell = |column: &[u32], index: [u32; 3]| {
        let mut arcs = column.to_vec();
        arcs.extend(index);
        Oid::new(arcs)
    };

    let mut agent = SimulatedAgent::new(community)
        .with(
            scalar(mib::LLDP_LOC_CHASSIS_ID),
            Value::OctetString(vec![0x02, 0x00, 0x5e, 0x00, 0x53, 0x01]),
        )
        .with(scalar(mib::LLDP_LOC_SYS_NAME), Value::from(name))
        .with(scalar(mib::LLDP_LOC_PORT_DESC), Value::from("uplink"))
        .with(
            scalar(mib::SYS_DESCR),
            Value::from(format!("{name} simulated LLDP agent").as_str()),
        )
        .with(
            scalar(mib::NET_SNMP_VENDOR),
            Value::ObjectId(scalar(mib::NET_SNMP_VENDOR)),
        );

    for n in 1..=neighbors {
        let index = [0, n, 1];
        let octet = (n % 256) as u8;
        agent.insert(
            cell(mib::LLDP_REM_CHASSIS_ID, index),
            Value::OctetString(vec![0x02, 0x00, 0x5e, 0x10, 0x00, octet]),
        );
        agent.insert(
            cell(mib::LLDP_REM_PORT_ID, index),
            Value::from(format!("ge-0/0/{n}").as_str()),
        );
        agent.insert(
            cell(mib::LLDP_REM_PORT_DESC, index),
            Value::from(format!("link to {name}").as_str()),
        );
        agent.insert(
            cell(mib::LLDP_REM_SYS_NAME, index),
            Value::from(format!("neighbor-{n}").as_str()),
        );
        agent.insert(
            cell(mib::LLDP_REM_SYS_CAP_ENABLED, index),
            Value::OctetString(vec![0x28, 0x00]),
        );
        let mut address = cell(mib::LLDP_REM_MAN_ADDR_IF_ID, index).arcs().to_vec();
        address.extend([1, 4, 192, 0, 2, u32::from(octet)]);
        agent.insert(Oid::new(address), Value::Integer(2));
    }
    agent
}
