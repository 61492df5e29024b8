//! Batch LLDP polling.
//!
//! Each target is polled in its own task: one get for the local identity
//! scalars, one walk per remote root, then table reconstruction. Failed
//! targets are logged and left out of the result.

use crate::session::{SessionConfig, SnmpSession};
use crate::ClientError;
use lldpscan_core::lldp::{
    GroupingPolicy, LocalRecord, OidTable, RemoteRecord, TableProfile, TableReconstructor,
};
use lldpscan_core::message::ErrorStatus;
use lldpscan_core::types::{Oid, VarBind};
use lldpscan_transport::address::DEFAULT_PORT;
use lldpscan_transport::{AgentAddress, Transport};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// One row of the input: where to poll and with which community.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSpec {
    pub target: String,
    pub community: String,
}

impl TargetSpec {
    pub fn new(target: impl Into<String>, community: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            community: community.into(),
        }
    }
}

/// Everything learned from one target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TargetReport {
    pub target: String,
    pub local: LocalRecord,
    pub remote: Vec<RemoteRecord>,
    /// Cells that matched no binding in the table.
    pub unmapped: usize,
}

#[derive(Debug, Clone)]
pub struct PollConfig {
    pub session: SessionConfig,
    /// Used when a target names no port.
    pub port: u16,
    /// Targets polled at once.
    pub concurrency: usize,
    pub grouping: GroupingPolicy,
    pub profile: TableProfile,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            port: DEFAULT_PORT,
            concurrency: 8,
            grouping: GroupingPolicy::default(),
            profile: TableProfile::default(),
        }
    }
}

/// Gets the local scalars, dropping identifiers a v1 agent reports as
/// `noSuchName` and asking again for the rest.
async fn get_local<T: Transport>(
    session: &SnmpSession<T>,
    oids: &[Oid],
) -> Result<Vec<VarBind>, ClientError> {
    let mut oids = oids.to_vec();
    while !oids.is_empty() {
        match session.get(&oids).await {
            Err(ClientError::Remote { status, index })
                if status == ErrorStatus::NoSuchName
                    && index >= 1
                    && (index as usize) <= oids.len() =>
            {
                let missing = oids.remove(index as usize - 1);
                debug!("{}: {missing} not present", session.target());
            }
            other => return other,
        }
    }
    Ok(Vec::new())
}

/// Polls one agent over an existing session.
pub async fn poll_target<T: Transport>(
    session: &SnmpSession<T>,
    table: &OidTable,
    policy: GroupingPolicy,
) -> Result<TargetReport, ClientError> {
    let target = session.target();
    let local_cells = get_local(session, table.local_oids()).await?;

    let mut remote_cells = Vec::new();
    for root in table.remote_roots() {
        let cells = session.walk(root).await?;
        debug!("{target}: {} cells under {root}", cells.len());
        remote_cells.extend(cells);
    }

    let mut reconstructor = TableReconstructor::new(table, policy);
    let local = reconstructor.local(&local_cells);
    let remote = reconstructor.remote(&remote_cells);
    if reconstructor.unmapped() > 0 {
        debug!(
            "{target}: dropped {} cells with no matching label",
            reconstructor.unmapped()
        );
    }

    Ok(TargetReport {
        target: target.to_string(),
        local,
        remote,
        unmapped: reconstructor.unmapped(),
    })
}

async fn poll_one(
    spec: &TargetSpec,
    config: &PollConfig,
    table: &OidTable,
) -> Result<TargetReport, ClientError> {
    let address = AgentAddress::resolve(&spec.target, config.port).await?;
    let session = SnmpSession::connect(address, &spec.community, config.session.clone()).await?;
    let mut report = poll_target(&session, table, config.grouping).await?;
    report.target = spec.target.clone();
    Ok(report)
}

/// Polls every target with bounded concurrency.
///
/// Reports come back in input order. Targets that fail to resolve, time out
/// or return an error are logged at warn level and omitted.
pub async fn poll_targets(targets: &[TargetSpec], config: &PollConfig) -> Vec<TargetReport> {
    let table = Arc::new(OidTable::new(&config.profile));
    let limit = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let config = Arc::new(config.clone());

    let mut tasks = JoinSet::new();
    for (position, spec) in targets.iter().cloned().enumerate() {
        let table = table.clone();
        let limit = limit.clone();
        let config = config.clone();
        tasks.spawn(async move {
            let _permit = limit.acquire_owned().await.ok()?;
            match poll_one(&spec, &config, &table).await {
                Ok(report) => {
                    info!(
                        "{}: {} local fields, {} neighbors",
                        spec.target,
                        report.local.fields.len(),
                        report.remote.len()
                    );
                    Some((position, report))
                }
                Err(e) => {
                    warn!("skipping {}: {e}", spec.target);
                    None
                }
            }
        });
    }

    let mut slots: Vec<Option<TargetReport>> = vec![None; targets.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some((position, report))) => slots[position] = Some(report),
            Ok(None) => {}
            Err(e) => warn!("poll task failed: {e}"),
        }
    }
    slots.into_iter().flatten().collect()
}
