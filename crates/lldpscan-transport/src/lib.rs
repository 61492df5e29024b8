#![allow(async_fn_in_trait)]

pub mod address;
pub mod traits;
pub mod udp;

pub use address::AgentAddress;
pub use traits::{Transport, TransportError};
pub use udp::UdpTransport;
