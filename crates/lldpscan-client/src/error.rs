use lldpscan_core::message::ErrorStatus;
use lldpscan_core::types::Oid;
use lldpscan_transport::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("encode error: {0}")]
    Encode(#[from] lldpscan_core::EncodeError),
    #[error("decode error: {0}")]
    Decode(#[from] lldpscan_core::DecodeError),
    #[error("request timed out")]
    Timeout,
    #[error("agent returned {status} for varbind {index}")]
    Remote { status: ErrorStatus, index: i32 },
    #[error("walk went backwards: {next} does not follow {previous}")]
    NonIncreasingOid { previous: Oid, next: Oid },
    #[error("unsupported response")]
    UnsupportedResponse,
}

impl ClientError {
    /// `true` for a v1 `noSuchName` error status.
    pub fn is_no_such_name(&self) -> bool {
        matches!(
            self,
            Self::Remote {
                status: ErrorStatus::NoSuchName,
                ..
            }
        )
    }
}
