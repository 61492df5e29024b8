use crate::TransportError;
use core::fmt;
use std::net::{IpAddr, SocketAddr};
use tokio::net::lookup_host;

/// Standard SNMP agent port.
pub const DEFAULT_PORT: u16 = 161;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentAddress {
    Udp(SocketAddr),
}

impl AgentAddress {
    pub fn snmp_default(addr: IpAddr) -> Self {
        Self::Udp(SocketAddr::new(addr, DEFAULT_PORT))
    }

    pub fn as_socket_addr(self) -> SocketAddr {
        match self {
            Self::Udp(addr) => addr,
        }
    }

    /// Resolves `host`, `ip`, `ip:port`, `[v6]:port` or `host:port`.
    ///
    /// Literal addresses never touch the resolver. Names resolve to their
    /// first address.
    pub async fn resolve(target: &str, default_port: u16) -> Result<Self, TransportError> {
        let target = target.trim();
        if let Ok(addr) = target.parse::<SocketAddr>() {
            return Ok(Self::Udp(addr));
        }
        if let Ok(ip) = target.parse::<IpAddr>() {
            return Ok(Self::Udp(SocketAddr::new(ip, default_port)));
        }

        let (host, port) = match target.rsplit_once(':') {
            Some((host, port)) if !host.contains(':') => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| TransportError::Resolve(target.to_string()))?;
                (host, port)
            }
            _ => (target, default_port),
        };
        if host.is_empty() {
            return Err(TransportError::Resolve(target.to_string()));
        }
        lookup_host((host, port))
            .await
            .map_err(|_| TransportError::Resolve(target.to_string()))?
            .next()
            .map(Self::Udp)
            .ok_or_else(|| TransportError::Resolve(target.to_string()))
    }
}

impl From<SocketAddr> for AgentAddress {
    fn from(addr: SocketAddr) -> Self {
        Self::Udp(addr)
    }
}

impl fmt::Display for AgentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Udp(addr) => write!(f, "{addr}"),
        }
    }
}
