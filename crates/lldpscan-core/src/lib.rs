//! SNMP message codec and LLDP table reconstruction in pure Rust.
//!
//! `lldpscan-core` decodes SNMP v1/v2c messages, renders varbind values for
//! display, and rebuilds LLDP-MIB tables (local identity plus one record per
//! remote neighbor) from the flat cell sequences an agent returns. It performs
//! no I/O and can be used in `no_std` environments with `alloc`.
//!
//! # Feature flags
//!
//! - **`std`** (default): enables `std::error::Error` implementations.
//! - **`serde`**: derives `Serialize`/`Deserialize` on OIDs, records and
//!   table profiles.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// BER encoding primitives and the zero-copy reader / bounded writer.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// LLDP value decoding, OID tables and table reconstruction.
pub mod lldp;
/// SNMP message and PDU codecs.
pub mod message;
/// Core SNMP data types: object identifiers, values and varbinds.
pub mod types;

pub use error::{DecodeError, EncodeError};
