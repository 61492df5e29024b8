use crate::{AgentAddress, Transport, TransportError};
use lldpscan_core::encoding::writer::MAX_MESSAGE_LEN;
use log::trace;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::UdpSocket;

/// SNMP over UDP.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    socket: Arc<UdpSocket>,
}

impl UdpTransport {
    pub async fn bind(bind_addr: SocketAddr) -> Result<Self, TransportError> {
        let socket = UdpSocket::bind(bind_addr).await?;
        Ok(Self {
            socket: Arc::new(socket),
        })
    }

    /// Binds an ephemeral port on the unspecified address of `target`'s
    /// address family.
    pub async fn bind_for(target: AgentAddress) -> Result<Self, TransportError> {
        let ip = match target.as_socket_addr() {
            SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        };
        Self::bind(SocketAddr::new(ip, 0)).await
    }

    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        self.socket.local_addr().map_err(TransportError::Io)
    }
}

impl Transport for UdpTransport {
    async fn send(&self, address: AgentAddress, payload: &[u8]) -> Result<(), TransportError> {
        if payload.len() > MAX_MESSAGE_LEN {
            return Err(TransportError::FrameTooLarge);
        }
        trace!("udp send {} bytes to {address}", payload.len());
        self.socket
            .send_to(payload, address.as_socket_addr())
            .await?;
        Ok(())
    }

    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, AgentAddress), TransportError> {
        let (n, src) = self.socket.recv_from(buf).await?;
        trace!("udp recv {n} bytes from {src}");
        Ok((n, AgentAddress::Udp(src)))
    }
}

#[cfg(test)]
mod tests {
    use super::UdpTransport;
    use crate::{AgentAddress, Transport, TransportError};
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use tokio::time::{timeout, Duration};

    fn loopback() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[tokio::test]
    async fn datagrams_round_trip_over_loopback() {
        let a = UdpTransport::bind(loopback()).await.unwrap();
        let b = UdpTransport::bind(loopback()).await.unwrap();
        let b_addr = AgentAddress::Udp(b.local_addr().unwrap());

        a.send(b_addr, &[0x30, 0x00]).await.unwrap();

        let mut buf = [0u8; 16];
        let (n, src) = timeout(Duration::from_secs(1), b.recv(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&buf[..n], &[0x30, 0x00]);
        assert_eq!(src, AgentAddress::Udp(a.local_addr().unwrap()));
    }

    #[tokio::test]
    async fn oversized_payload_is_refused() {
        let a = UdpTransport::bind(loopback()).await.unwrap();
        let target = AgentAddress::Udp(a.local_addr().unwrap());
        let payload = vec![0u8; 70_000];
        assert!(matches!(
            a.send(target, &payload).await,
            Err(TransportError::FrameTooLarge)
        ));
    }

    #[tokio::test]
    async fn bind_for_matches_address_family() {
        let target = AgentAddress::snmp_default(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let t = UdpTransport::bind_for(target).await.unwrap();
        assert!(t.local_addr().unwrap().is_ipv4());
    }
}
