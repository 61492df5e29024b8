pub mod error;
pub mod poll;
pub mod session;
pub mod simulator;

pub use error::ClientError;
pub use lldpscan_core::lldp::{GroupingPolicy, LocalRecord, OidTable, RemoteRecord, TableProfile};
pub use lldpscan_core::message::{ErrorStatus, SnmpVersion};
pub use lldpscan_transport::{AgentAddress, UdpTransport};
pub use poll::{poll_target, poll_targets, PollConfig, TargetReport, TargetSpec};
pub use session::{SessionConfig, SnmpSession};
pub use simulator::SimulatedAgent;
