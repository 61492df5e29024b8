//! LLDP-MIB polling support: value rendering and table reconstruction.
//!
//! An agent exposes the remote-systems table as a flat, ordered run of
//! `(oid, value)` cells with no row boundaries. [`TableReconstructor`] maps
//! each cell to a labelled column through an [`OidTable`] and groups the cells
//! back into one [`RemoteRecord`] per neighbor.

pub mod display;
pub mod mib;
pub mod profile;
pub mod reconstruct;
pub mod record;
pub mod table;

pub use display::{decode_value, is_mostly_printable, DecodedValue, NIL};
pub use profile::{LabelBinding, TableProfile};
pub use reconstruct::{collect_local, collect_remote, GroupingPolicy, TableReconstructor};
pub use record::{Fields, LocalRecord, RemoteRecord};
pub use table::{Column, OidTable};
