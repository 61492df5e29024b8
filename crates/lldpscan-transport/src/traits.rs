use crate::AgentAddress;
use thiserror::Error;

/// Errors that can occur while moving datagrams to and from an agent.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("datagram too large")]
    FrameTooLarge,
    #[error("cannot resolve target '{0}'")]
    Resolve(String),
}

/// Async trait for sending and receiving raw SNMP datagrams.
///
/// [`UdpTransport`](crate::UdpTransport) is the production implementation;
/// tests substitute in-memory transports.
pub trait Transport: Send + Sync {
    /// Sends `payload` to `address`.
    async fn send(&self, address: AgentAddress, payload: &[u8]) -> Result<(), TransportError>;

    /// Receives a datagram into `buf`, returning `(bytes_read, source_address)`.
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, AgentAddress), TransportError>;
}
