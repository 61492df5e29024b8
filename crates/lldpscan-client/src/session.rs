use crate::ClientError;
use lldpscan_core::message::{ErrorStatus, Message, Pdu, PduType, SnmpVersion};
use lldpscan_core::types::{Oid, Value, VarBind};
use lldpscan_transport::{AgentAddress, Transport, UdpTransport};
use log::{debug, trace};
use std::slice;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{timeout, Instant};

const MAX_DATAGRAM_LEN: usize = 65_535;

/// Protocol and retry settings for one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub version: SnmpVersion,
    /// Wait per attempt.
    pub timeout: Duration,
    /// Extra attempts after the first one times out.
    pub retries: u32,
    /// GetBulk repetitions per walk step (v2c only).
    pub max_repetitions: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            version: SnmpVersion::V2c,
            timeout: Duration::from_secs(5),
            retries: 1,
            max_repetitions: 10,
        }
    }
}

/// A community-based SNMP session with a single agent.
///
/// Requests are serialized: one request/response exchange is in flight at a
/// time, and every request carries a fresh positive request id.
#[derive(Debug)]
pub struct SnmpSession<T: Transport> {
    transport: T,
    target: AgentAddress,
    community: Vec<u8>,
    config: SessionConfig,
    request_id: Mutex<i32>,
    request_io_lock: Mutex<()>,
}

impl SnmpSession<UdpTransport> {
    /// Binds an ephemeral UDP socket suited to `target`.
    pub async fn connect(
        target: AgentAddress,
        community: impl AsRef<[u8]>,
        config: SessionConfig,
    ) -> Result<Self, ClientError> {
        let transport = UdpTransport::bind_for(target).await?;
        Ok(Self::new(transport, target, community, config))
    }
}

impl<T: Transport> SnmpSession<T> {
    pub fn new(
        transport: T,
        target: AgentAddress,
        community: impl AsRef<[u8]>,
        config: SessionConfig,
    ) -> Self {
        Self {
            transport,
            target,
            community: community.as_ref().to_vec(),
            config,
            request_id: Mutex::new(1),
            request_io_lock: Mutex::new(()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout.max(Duration::from_millis(1));
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    pub fn target(&self) -> AgentAddress {
        self.target
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    async fn next_request_id(&self) -> i32 {
        let mut lock = self.request_id.lock().await;
        let id = *lock;
        *lock = lock.wrapping_add(1);
        if *lock <= 0 {
            *lock = 1;
        }
        id
    }

    async fn recv_response(&self, request_id: i32, deadline: Instant) -> Result<Pdu, ClientError> {
        let mut buf = vec![0u8; MAX_DATAGRAM_LEN];
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(ClientError::Timeout);
            }

            let (n, src) = match timeout(remaining, self.transport.recv(&mut buf)).await {
                Err(_) => return Err(ClientError::Timeout),
                Ok(Err(e)) => return Err(e.into()),
                Ok(Ok(v)) => v,
            };
            if src != self.target {
                trace!("ignoring datagram from {src}, expected {}", self.target);
                continue;
            }
            let message = match Message::decode(&buf[..n]) {
                Ok(message) => message,
                Err(e) => {
                    debug!("ignoring undecodable datagram from {src}: {e}");
                    continue;
                }
            };
            if message.pdu.pdu_type != PduType::Response || message.pdu.request_id != request_id {
                trace!(
                    "ignoring {:?} with request id {} from {src}",
                    message.pdu.pdu_type,
                    message.pdu.request_id
                );
                continue;
            }
            return Ok(message.pdu);
        }
    }

    async fn request(&self, pdu: Pdu) -> Result<Vec<VarBind>, ClientError> {
        let request_id = pdu.request_id;
        let frame = Message::new(self.config.version, &self.community, pdu).to_bytes()?;

        let _io_lock = self.request_io_lock.lock().await;
        let attempts = self.config.retries.saturating_add(1);
        for attempt in 1..=attempts {
            self.transport.send(self.target, &frame).await?;
            let deadline = Instant::now() + self.config.timeout;
            match self.recv_response(request_id, deadline).await {
                Ok(response) => {
                    let status = response.status();
                    if status != ErrorStatus::NoError {
                        return Err(ClientError::Remote {
                            status,
                            index: response.error_index,
                        });
                    }
                    return Ok(response.varbinds);
                }
                Err(ClientError::Timeout) => {
                    debug!(
                        "request {request_id} to {} timed out (attempt {attempt}/{attempts})",
                        self.target
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Err(ClientError::Timeout)
    }

    /// Fetches exactly the given instances.
    pub async fn get(&self, oids: &[Oid]) -> Result<Vec<VarBind>, ClientError> {
        let request_id = self.next_request_id().await;
        let varbinds = self.request(Pdu::get(request_id, oids)).await?;
        if varbinds.len() != oids.len() {
            return Err(ClientError::UnsupportedResponse);
        }
        Ok(varbinds)
    }

    /// Fetches the lexicographic successor of each identifier.
    pub async fn get_next(&self, oids: &[Oid]) -> Result<Vec<VarBind>, ClientError> {
        let request_id = self.next_request_id().await;
        let varbinds = self.request(Pdu::get_next(request_id, oids)).await?;
        if varbinds.len() != oids.len() {
            return Err(ClientError::UnsupportedResponse);
        }
        Ok(varbinds)
    }

    /// SNMPv2c GetBulk. Fails to encode on a v1 session.
    pub async fn get_bulk(
        &self,
        oids: &[Oid],
        non_repeaters: u32,
        max_repetitions: u32,
    ) -> Result<Vec<VarBind>, ClientError> {
        let request_id = self.next_request_id().await;
        let pdu = Pdu::get_bulk(
            request_id,
            i32::try_from(non_repeaters).unwrap_or(i32::MAX),
            i32::try_from(max_repetitions).unwrap_or(i32::MAX),
            oids,
        );
        self.request(pdu).await
    }

    /// Returns every cell under `root` in agent order.
    ///
    /// Uses GetBulk on v2c sessions and GetNext on v1. The walk ends at
    /// `endOfMibView`, at the first cell outside `root`, or on a v1
    /// `noSuchName`. When the subtree is empty, `root` itself is fetched so a
    /// walk of a scalar instance returns that instance.
    pub async fn walk(&self, root: &Oid) -> Result<Vec<VarBind>, ClientError> {
        let mut cells = Vec::new();
        let mut cursor = root.clone();
        'walk: loop {
            let batch = if self.config.version.supports_bulk() {
                self.get_bulk(slice::from_ref(&cursor), 0, self.config.max_repetitions.max(1))
                    .await?
            } else {
                match self.get_next(slice::from_ref(&cursor)).await {
                    Err(e) if e.is_no_such_name() => break,
                    other => other?,
                }
            };
            if batch.is_empty() {
                break;
            }
            for cell in batch {
                if cell.value == Value::EndOfMibView || !cell.oid.starts_with(root) {
                    break 'walk;
                }
                if cell.oid <= cursor {
                    return Err(ClientError::NonIncreasingOid {
                        previous: cursor,
                        next: cell.oid,
                    });
                }
                trace!("walk {root}: {}", cell.oid);
                cursor = cell.oid.clone();
                cells.push(cell);
            }
        }

        if cells.is_empty() {
            match self.get(slice::from_ref(root)).await {
                Ok(exact) => cells.extend(exact.into_iter().filter(|c| !c.value.is_exception())),
                Err(e) if e.is_no_such_name() => {}
                Err(e) => return Err(e),
            }
        }
        debug!(
            "walk of {root} on {} returned {} cells",
            self.target,
            cells.len()
        );
        Ok(cells)
    }
}
